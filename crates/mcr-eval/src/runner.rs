//! Evaluator registry and batch execution.

use std::panic::{catch_unwind, AssertUnwindSafe};

use futures::stream::{self, StreamExt};

use crate::evaluators::{
    all_beats_present, all_emails_present, all_publications_present, no_duplicate_emails,
    primary_flags_set, title_preserved,
};
use crate::types::{EvalCase, Evaluation};

/// All evaluators by name, in report order.
pub const EVALUATORS: &[(&str, fn(&EvalCase) -> Evaluation)] = &[
    ("all-emails-present", all_emails_present),
    ("all-beats-present", all_beats_present),
    ("all-publications-present", all_publications_present),
    ("title-preserved", title_preserved),
    ("no-duplicate-emails", no_duplicate_emails),
    ("primary-flags-set", primary_flags_set),
];

/// Run every evaluator on one case.
///
/// An evaluator that panics is captured as score 0 with the panic text as
/// `reason`; a single faulty evaluator never aborts the batch.
#[must_use]
pub fn run_case(case: &EvalCase) -> Vec<Evaluation> {
    EVALUATORS
        .iter()
        .map(|&(name, evaluator)| run_one(name, evaluator, case))
        .collect()
}

fn run_one(name: &'static str, evaluator: fn(&EvalCase) -> Evaluation, case: &EvalCase) -> Evaluation {
    match catch_unwind(AssertUnwindSafe(|| evaluator(case))) {
        Ok(evaluation) => evaluation,
        Err(payload) => {
            let text = panic_text(payload.as_ref());
            tracing::warn!(
                evaluator = name,
                test_case_id = %case.test_case_id,
                panic = %text,
                "evaluator panicked, scoring 0"
            );
            Evaluation {
                test_case_id: case.test_case_id.clone(),
                evaluator: name,
                score: 0.0,
                reason: format!("evaluator panicked: {text}"),
                diagnostics: serde_json::Value::Null,
            }
        }
    }
}

fn panic_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}

/// Run every evaluator over every case with bounded concurrency.
///
/// Evaluators are pure and read-only, so cases are trivially parallel;
/// result order follows completion, not input, and carries the case id on
/// every row.
pub async fn run_batch(cases: &[EvalCase], concurrency: usize) -> Vec<Evaluation> {
    stream::iter(cases)
        .map(|case| async move { run_case(case) })
        .buffer_unordered(concurrency.max(1))
        .collect::<Vec<Vec<Evaluation>>>()
        .await
        .into_iter()
        .flatten()
        .collect()
}
