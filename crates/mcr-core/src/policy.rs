//! Identifier resolution policy.
//!
//! Identifier fields must never be fabricated by a merge. For `companyId`
//! the rule is unanimity: the merged record may carry a company id only when
//! every variant that specifies one specifies the same value. Scalar fields
//! such as `position` or `companyName` are not identifiers and stay with the
//! "most complete wins" resolution performed by the generation step.

use crate::contact::Variant;

/// Returns the company id unanimously supported by the variants, if any.
///
/// `Some(id)` iff at least one variant carries a `companyId` and all
/// carrying variants agree on the exact value. Ids are opaque, compared
/// case-sensitively. Returns `None` on disagreement or when no variant
/// carries one — the merged record's `companyId` must then be absent.
#[must_use]
pub fn unanimous_company_id(variants: &[Variant]) -> Option<String> {
    let mut unanimous: Option<&str> = None;
    for variant in variants {
        let Some(id) = variant.contact_data.company_id.as_deref() else {
            continue;
        };
        match unanimous {
            None => unanimous = Some(id),
            Some(seen) if seen == id => {}
            Some(_) => return None,
        }
    }
    unanimous.map(str::to_owned)
}
