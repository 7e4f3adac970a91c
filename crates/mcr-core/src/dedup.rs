//! Case-insensitive union-dedup over multi-valued contact fields.
//!
//! This is the single source of truth for "no information loss": the repair
//! step uses it to recompute recoverable fields and the evaluator suite uses
//! it to compute expected values independently. All unions preserve
//! first-seen order across the variant list for determinism; correctness is
//! defined only up to set equality.

use std::collections::HashSet;

use crate::contact::{ContactEmail, MediaType, Variant};

/// Multi-valued string fields addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringListField {
    Beats,
    Publications,
}

/// Union of `emails` across all variants, deduplicated on the lowercased
/// address. `type`/`isPrimary`/`isVerified` decoration never distinguishes
/// two entries; the first-seen entry keeps its decoration.
#[must_use]
pub fn union_emails(variants: &[Variant]) -> Vec<ContactEmail> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for variant in variants {
        for entry in &variant.contact_data.emails {
            if seen.insert(entry.email.trim().to_lowercase()) {
                out.push(entry.clone());
            }
        }
    }
    out
}

/// Union of a named string-list field across all variants, deduplicated on
/// the trimmed lowercase value. First-seen casing wins.
#[must_use]
pub fn union_strings(field: StringListField, variants: &[Variant]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for variant in variants {
        let values = match field {
            StringListField::Beats => &variant.contact_data.beats,
            StringListField::Publications => &variant.contact_data.publications,
        };
        for value in values {
            if seen.insert(value.trim().to_lowercase()) {
                out.push(value.clone());
            }
        }
    }
    out
}

/// Union of `mediaTypes` across all variants, first-seen order.
#[must_use]
pub fn union_media_types(variants: &[Variant]) -> Vec<MediaType> {
    let mut seen: HashSet<MediaType> = HashSet::new();
    let mut out = Vec::new();
    for variant in variants {
        for mt in &variant.contact_data.media_types {
            if seen.insert(*mt) {
                out.push(*mt);
            }
        }
    }
    out
}

/// Deduplicate one email list in place-order with the same comparison as
/// [`union_emails`]: lowercased address, first entry wins.
#[must_use]
pub fn dedup_emails(emails: &[ContactEmail]) -> Vec<ContactEmail> {
    let mut seen: HashSet<String> = HashSet::new();
    emails
        .iter()
        .filter(|e| seen.insert(e.email.trim().to_lowercase()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactData, EmailType, StructuredName};

    fn variant(org: &str, data: ContactData) -> Variant {
        Variant {
            organization_id: org.to_owned(),
            organization_name: format!("{org} GmbH"),
            contact_id: format!("{org}-contact"),
            contact_data: data,
        }
    }

    fn base_data() -> ContactData {
        ContactData {
            name: StructuredName {
                first_name: "Anna".to_owned(),
                last_name: "Weber".to_owned(),
                title: None,
                suffix: None,
            },
            display_name: "Anna Weber".to_owned(),
            emails: Vec::new(),
            phones: Vec::new(),
            position: None,
            department: None,
            company_name: None,
            company_id: None,
            has_media_profile: true,
            beats: Vec::new(),
            media_types: Vec::new(),
            publications: Vec::new(),
            social_profiles: Vec::new(),
            photo_url: None,
            website: None,
        }
    }

    fn email(address: &str, primary: bool) -> ContactEmail {
        ContactEmail {
            email: address.to_owned(),
            kind: EmailType::Business,
            is_primary: Some(primary),
            is_verified: None,
        }
    }

    #[test]
    fn union_emails_ignores_case_and_decoration() {
        let mut a = base_data();
        a.emails = vec![email("Anna@X.com", true)];
        let mut b = base_data();
        b.emails = vec![email("anna@x.com", false), email("b@x.com", false)];

        let union = union_emails(&[variant("a", a), variant("b", b)]);
        assert_eq!(union.len(), 2);
        // First-seen entry keeps its decoration.
        assert_eq!(union[0].email, "Anna@X.com");
        assert_eq!(union[0].is_primary, Some(true));
        assert_eq!(union[1].email, "b@x.com");
    }

    #[test]
    fn union_strings_preserves_first_seen_order_and_casing() {
        let mut a = base_data();
        a.beats = vec!["Tech".to_owned()];
        let mut b = base_data();
        b.beats = vec!["tech".to_owned(), "Gaming".to_owned()];

        let union = union_strings(StringListField::Beats, &[variant("a", a), variant("b", b)]);
        assert_eq!(union, vec!["Tech".to_owned(), "Gaming".to_owned()]);
    }

    #[test]
    fn union_strings_trims_before_comparing() {
        let mut a = base_data();
        a.publications = vec!["Der Spiegel".to_owned()];
        let mut b = base_data();
        b.publications = vec!["  der spiegel ".to_owned(), "Die Zeit".to_owned()];

        let union = union_strings(
            StringListField::Publications,
            &[variant("a", a), variant("b", b)],
        );
        assert_eq!(union, vec!["Der Spiegel".to_owned(), "Die Zeit".to_owned()]);
    }

    #[test]
    fn union_media_types_dedups_by_value() {
        let mut a = base_data();
        a.media_types = vec![MediaType::Print, MediaType::Online];
        let mut b = base_data();
        b.media_types = vec![MediaType::Online, MediaType::Podcast];

        let union = union_media_types(&[variant("a", a), variant("b", b)]);
        assert_eq!(
            union,
            vec![MediaType::Print, MediaType::Online, MediaType::Podcast]
        );
    }

    #[test]
    fn union_over_empty_variant_list_is_empty() {
        assert!(union_emails(&[]).is_empty());
        assert!(union_strings(StringListField::Beats, &[]).is_empty());
        assert!(union_media_types(&[]).is_empty());
    }

    #[test]
    fn dedup_emails_keeps_first_occurrence() {
        let list = vec![email("a@x.com", true), email("A@X.COM", false)];
        let deduped = dedup_emails(&list);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].is_primary, Some(true));
    }
}
