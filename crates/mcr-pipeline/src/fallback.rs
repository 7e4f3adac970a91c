//! Deterministic fallback: the first variant, verbatim.

use mcr_core::{MergedContact, Variant};

/// Returns the first variant's contact data unchanged, or `None` for an
/// empty list. This is the system's safety net; given a non-empty variant
/// list it always succeeds.
#[must_use]
pub fn fallback_contact(variants: &[Variant]) -> Option<MergedContact> {
    variants.first().map(|v| v.contact_data.clone())
}
