use thiserror::Error;

/// The only error a merge can return. Generation failures, malformed
/// responses, and schema violations are all recovered internally via repair
/// or fallback; an empty input list is a caller contract violation, not a
/// pipeline failure.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("merge requires at least one variant")]
    EmptyInput,
}

/// Why a generation candidate was rejected. `EmptyEmails` is reported
/// distinctly because it is cheaply recoverable by the repair step; the
/// rest escalate to fallback.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("response contains no JSON object")]
    NoJsonObject,

    #[error("response is a top-level JSON array, expected exactly one object")]
    TopLevelArray,

    #[error("candidate does not match the contact shape: {0}")]
    Json(#[from] serde_json::Error),

    #[error("required field missing or empty: {0}")]
    MissingRequired(&'static str),

    #[error("candidate has an empty emails array")]
    EmptyEmails,
}
