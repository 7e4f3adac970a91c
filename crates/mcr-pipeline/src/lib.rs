//! Merge pipeline: orchestration, validation, repair, and fallback.
//!
//! Wraps the nondeterministic generation step in a strictly deterministic
//! validate → repair → fallback shell, so correctness never depends on
//! generation determinism. For a non-empty variant list [`MergeEngine::merge`]
//! always produces a schema-valid [`mcr_core::MergedContact`]; the worst
//! case is the first variant returned unchanged (the fallback law).

pub mod engine;
pub mod error;
pub mod fallback;
pub mod repair;
pub mod validate;

pub use engine::{MergeConfig, MergeEngine};
pub use error::{MergeError, ValidationError};
pub use fallback::fallback_contact;
pub use repair::{repair_candidate, RepairReport};
pub use validate::{parse_candidate, validate_candidate};
