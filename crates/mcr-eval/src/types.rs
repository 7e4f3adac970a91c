//! Harness boundary types.

use serde::{Deserialize, Serialize};

use mcr_core::{MergedContact, Variant};

/// One dataset entry supplied by the external harness: the variants fed to
/// a merge (`input`) and the record the merge produced (`output`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalCase {
    pub test_case_id: String,
    #[serde(rename = "input")]
    pub variants: Vec<Variant>,
    #[serde(rename = "output")]
    pub merged: MergedContact,
}

/// One evaluator's verdict on one case. `score` is binary (0.0 or 1.0);
/// `diagnostics` carries evaluator-specific detail for the report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub test_case_id: String,
    pub evaluator: &'static str,
    pub score: f64,
    pub reason: String,
    pub diagnostics: serde_json::Value,
}

impl Evaluation {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.score >= 1.0
    }
}
