//! Merge orchestration.

use std::sync::Arc;
use std::time::Duration;

use mcr_core::{GenSettings, MergedContact, Variant};
use mcr_gen::{build_merge_prompt, retry_with_backoff, Generator};

use crate::error::{MergeError, ValidationError};
use crate::fallback::fallback_contact;
use crate::repair::repair_candidate;
use crate::validate::{parse_candidate, validate_candidate};

/// Tuning knobs for one engine. Defaults: 30 s overall generation timeout,
/// zero automatic retries (the deterministic fallback provides availability).
#[derive(Debug, Clone)]
pub struct MergeConfig {
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            max_retries: 0,
            backoff_base_ms: 1000,
        }
    }
}

impl From<&GenSettings> for MergeConfig {
    fn from(settings: &GenSettings) -> Self {
        Self {
            request_timeout_secs: settings.request_timeout_secs,
            max_retries: settings.max_retries,
            backoff_base_ms: settings.backoff_base_ms,
        }
    }
}

/// Top-level merge entry point.
///
/// Stateless across calls: arbitrarily many merges may run concurrently on
/// one engine. The only suspension point is the single generation call,
/// bounded by the configured timeout.
pub struct MergeEngine {
    generator: Arc<dyn Generator>,
    config: MergeConfig,
}

impl MergeEngine {
    #[must_use]
    pub fn new(generator: Arc<dyn Generator>, config: MergeConfig) -> Self {
        Self { generator, config }
    }

    /// Merge the variants into one canonical contact.
    ///
    /// 1. Build the merge prompt and issue one generation call, bounded by
    ///    the configured timeout (with optional bounded retry of transient
    ///    errors).
    /// 2. Parse and validate the response; recover an empty `emails` array
    ///    through field-granular repair.
    /// 3. On generation failure, malformed text, or an unrecoverable schema
    ///    violation, fall back to the first variant unchanged.
    ///
    /// For a non-empty variant list this never fails; the result always
    /// satisfies the output invariants or is the verbatim first variant.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::EmptyInput`] only when `variants` is empty.
    pub async fn merge(&self, variants: &[Variant]) -> Result<MergedContact, MergeError> {
        let Some(fallback) = fallback_contact(variants) else {
            return Err(MergeError::EmptyInput);
        };

        let prompt = build_merge_prompt(variants);
        let timeout = Duration::from_secs(self.config.request_timeout_secs);
        let generation = tokio::time::timeout(
            timeout,
            retry_with_backoff(self.config.max_retries, self.config.backoff_base_ms, || {
                self.generator.generate(&prompt)
            }),
        )
        .await;

        let raw = match generation {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "generation call failed, using first-variant fallback");
                return Ok(fallback);
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.config.request_timeout_secs,
                    "generation call timed out, using first-variant fallback"
                );
                return Ok(fallback);
            }
        };

        let mut candidate = match parse_candidate(&raw) {
            Ok(candidate) => candidate,
            Err(e) => {
                tracing::warn!(error = %e, "generation response malformed, using first-variant fallback");
                return Ok(fallback);
            }
        };

        // Structural validation first; only the known-recoverable violation
        // proceeds to repair, everything else escalates to fallback.
        match validate_candidate(&candidate) {
            Ok(()) | Err(ValidationError::EmptyEmails) => {}
            Err(e) => {
                tracing::warn!(error = %e, "candidate failed validation, using first-variant fallback");
                return Ok(fallback);
            }
        }

        let report = repair_candidate(&mut candidate, variants);
        if report.changed() {
            tracing::debug!(?report, "candidate repaired");
        }

        // Repair may still come up empty (no variant had emails either).
        if let Err(e) = validate_candidate(&candidate) {
            tracing::warn!(error = %e, "candidate invalid after repair, using first-variant fallback");
            return Ok(fallback);
        }

        Ok(candidate)
    }
}
