//! Quality evaluator suite.
//!
//! Six independent, pure scoring functions that grade an (input variants,
//! merged record) pair against the merge invariants. Consumed by an
//! external test harness, never by the merge pipeline itself. Scores are
//! binary; an evaluator that panics is captured per-case as score 0 with
//! the panic text, so a batch run never aborts.

pub mod evaluators;
pub mod runner;
pub mod types;

pub use evaluators::{
    all_beats_present, all_emails_present, all_publications_present, no_duplicate_emails,
    primary_flags_set, title_preserved,
};
pub use runner::{run_batch, run_case, EVALUATORS};
pub use types::{EvalCase, Evaluation};
