//! Field-granular repair of a generation candidate.
//!
//! Repair never invents data and never touches fields that are already
//! present and valid: recoverable fields are recomputed from the original
//! variants through the union-dedup procedure, the candidate's email list
//! is deduplicated, missing union entries are appended so the output stays
//! a superset of every variant, and the company-id unanimity policy is
//! enforced.

use std::collections::HashSet;

use mcr_core::{
    dedup_emails, unanimous_company_id, union_emails, union_media_types, union_strings,
    ContactData, StringListField, Variant,
};

/// Which repairs were applied, for logging.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RepairReport {
    pub emails_recomputed: bool,
    pub publications_recomputed: bool,
    pub emails_deduped: bool,
    pub company_id_adjusted: bool,
    /// Fields that had union entries appended to restore the superset
    /// invariant.
    pub superset_fields: Vec<&'static str>,
}

impl RepairReport {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.emails_recomputed
            || self.publications_recomputed
            || self.emails_deduped
            || self.company_id_adjusted
            || !self.superset_fields.is_empty()
    }
}

/// Repair a parsed candidate in place against the original variants.
pub fn repair_candidate(candidate: &mut ContactData, variants: &[Variant]) -> RepairReport {
    let mut report = RepairReport::default();

    // Recoverable empty fields: recompute only that field from the variants.
    if candidate.emails.is_empty() {
        let union = union_emails(variants);
        if !union.is_empty() {
            candidate.emails = union;
            report.emails_recomputed = true;
        }
    }
    if candidate.publications.is_empty() {
        let union = union_strings(StringListField::Publications, variants);
        if !union.is_empty() {
            candidate.publications = union;
            report.publications_recomputed = true;
        }
    }

    // Collapse duplicate addresses the generation step may have produced.
    let deduped = dedup_emails(&candidate.emails);
    if deduped.len() != candidate.emails.len() {
        candidate.emails = deduped;
        report.emails_deduped = true;
    }

    // Superset invariant: append any union entry the candidate is missing.
    if !report.emails_recomputed {
        let mut seen: HashSet<String> = candidate
            .emails
            .iter()
            .map(|e| e.email.trim().to_lowercase())
            .collect();
        for entry in union_emails(variants) {
            if seen.insert(entry.email.trim().to_lowercase()) {
                candidate.emails.push(entry);
                push_once(&mut report.superset_fields, "emails");
            }
        }
    }
    append_missing_strings(
        &mut candidate.beats,
        &union_strings(StringListField::Beats, variants),
        "beats",
        &mut report.superset_fields,
    );
    if !report.publications_recomputed {
        append_missing_strings(
            &mut candidate.publications,
            &union_strings(StringListField::Publications, variants),
            "publications",
            &mut report.superset_fields,
        );
    }
    for mt in union_media_types(variants) {
        if !candidate.media_types.contains(&mt) {
            candidate.media_types.push(mt);
            push_once(&mut report.superset_fields, "mediaTypes");
        }
    }

    // Identifiers are never guessed: keep a company id only when the
    // variants unanimously support one.
    let unanimous = unanimous_company_id(variants);
    if candidate.company_id != unanimous {
        candidate.company_id = unanimous;
        report.company_id_adjusted = true;
    }

    report
}

fn append_missing_strings(
    target: &mut Vec<String>,
    union: &[String],
    field: &'static str,
    touched: &mut Vec<&'static str>,
) {
    let mut seen: HashSet<String> = target.iter().map(|s| s.trim().to_lowercase()).collect();
    for value in union {
        if seen.insert(value.trim().to_lowercase()) {
            target.push(value.clone());
            push_once(touched, field);
        }
    }
}

fn push_once(fields: &mut Vec<&'static str>, field: &'static str) {
    if !fields.contains(&field) {
        fields.push(field);
    }
}
