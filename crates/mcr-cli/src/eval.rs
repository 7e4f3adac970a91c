//! `mcr eval` handler.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;

use mcr_eval::{run_batch, EvalCase, EVALUATORS};

/// Read a JSON array of eval cases, score them with every evaluator, print
/// one JSON line per evaluation, and finish with a per-evaluator summary.
pub(crate) async fn run_eval(input: &Path, concurrency: usize) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("reading eval dataset from {}", input.display()))?;
    let cases: Vec<EvalCase> = serde_json::from_str(&raw).context("parsing eval dataset JSON")?;
    anyhow::ensure!(!cases.is_empty(), "dataset contains no cases");

    tracing::info!(cases = cases.len(), concurrency, "running evaluator batch");
    let evaluations = run_batch(&cases, concurrency).await;

    let mut passes: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for evaluation in &evaluations {
        let entry = passes.entry(evaluation.evaluator).or_default();
        entry.1 += 1;
        if evaluation.passed() {
            entry.0 += 1;
        }
        println!("{}", serde_json::to_string(evaluation)?);
    }

    println!();
    println!("evaluator summary ({} cases):", cases.len());
    // Report order matches the registry, not the BTreeMap.
    for &(name, _) in EVALUATORS {
        if let Some(&(passed, total)) = passes.get(name) {
            println!("  {name:<26} {passed}/{total}");
        }
    }
    Ok(())
}
