//! The six scoring functions.
//!
//! All comparisons are case-insensitive and order-insensitive; expected
//! values come from the same union-dedup procedure the repair step uses,
//! so "no information loss" means exactly one thing everywhere.

use std::collections::HashSet;

use mcr_core::{union_emails, union_strings, StringListField};

use crate::types::{EvalCase, Evaluation};

fn key(s: &str) -> String {
    s.trim().to_lowercase()
}

fn subset_evaluation(
    case: &EvalCase,
    evaluator: &'static str,
    field: &str,
    expected: Vec<String>,
    actual: Vec<String>,
) -> Evaluation {
    let have: HashSet<String> = actual.iter().map(|s| key(s)).collect();
    let missing: Vec<&String> = expected.iter().filter(|e| !have.contains(&key(e))).collect();

    let score = if missing.is_empty() { 1.0 } else { 0.0 };
    let reason = if missing.is_empty() {
        format!("all {} expected {field} present", expected.len())
    } else {
        format!("{} of {} expected {field} missing", missing.len(), expected.len())
    };

    Evaluation {
        test_case_id: case.test_case_id.clone(),
        evaluator,
        score,
        reason,
        diagnostics: serde_json::json!({
            "expected": expected,
            "actual": actual,
            "missing": missing,
        }),
    }
}

/// 1 iff every email address in the variant union appears in the merged
/// record (case-insensitive address comparison).
#[must_use]
pub fn all_emails_present(case: &EvalCase) -> Evaluation {
    let expected = union_emails(&case.variants)
        .into_iter()
        .map(|e| e.email)
        .collect();
    let actual = case.merged.emails.iter().map(|e| e.email.clone()).collect();
    subset_evaluation(case, "all-emails-present", "emails", expected, actual)
}

/// 1 iff every beat in the variant union appears in the merged record.
#[must_use]
pub fn all_beats_present(case: &EvalCase) -> Evaluation {
    let expected = union_strings(StringListField::Beats, &case.variants);
    subset_evaluation(
        case,
        "all-beats-present",
        "beats",
        expected,
        case.merged.beats.clone(),
    )
}

/// 1 iff every publication in the variant union appears in the merged record.
#[must_use]
pub fn all_publications_present(case: &EvalCase) -> Evaluation {
    let expected = union_strings(StringListField::Publications, &case.variants);
    subset_evaluation(
        case,
        "all-publications-present",
        "publications",
        expected,
        case.merged.publications.clone(),
    )
}

/// If any variant carries a name title, the merged title must equal the
/// first such title in input order. Always 1 when no variant has one.
#[must_use]
pub fn title_preserved(case: &EvalCase) -> Evaluation {
    let expected = case
        .variants
        .iter()
        .find_map(|v| v.contact_data.name.title.as_deref().filter(|t| !t.trim().is_empty()));
    let actual = case.merged.name.title.as_deref();

    let (score, reason) = match expected {
        None => (1.0, "no variant carries a title".to_owned()),
        Some(t) if actual == Some(t) => (1.0, format!("title '{t}' preserved")),
        Some(t) => (
            0.0,
            format!("expected title '{t}', merged record has {actual:?}"),
        ),
    };

    Evaluation {
        test_case_id: case.test_case_id.clone(),
        evaluator: "title-preserved",
        score,
        reason,
        diagnostics: serde_json::json!({ "expected": expected, "actual": actual }),
    }
}

/// 1 iff no two merged emails share the same address case-insensitively.
#[must_use]
pub fn no_duplicate_emails(case: &EvalCase) -> Evaluation {
    let mut seen: HashSet<String> = HashSet::new();
    let duplicates: Vec<&str> = case
        .merged
        .emails
        .iter()
        .filter(|e| !seen.insert(key(&e.email)))
        .map(|e| e.email.as_str())
        .collect();

    let score = if duplicates.is_empty() { 1.0 } else { 0.0 };
    let reason = if duplicates.is_empty() {
        "no duplicate addresses".to_owned()
    } else {
        format!("{} duplicate address(es)", duplicates.len())
    };

    Evaluation {
        test_case_id: case.test_case_id.clone(),
        evaluator: "no-duplicate-emails",
        score,
        reason,
        diagnostics: serde_json::json!({ "duplicates": duplicates }),
    }
}

/// 1 iff at least one merged email is flagged primary, and — when phones
/// are present — at least one phone is flagged primary too.
#[must_use]
pub fn primary_flags_set(case: &EvalCase) -> Evaluation {
    let email_primary = case
        .merged
        .emails
        .iter()
        .any(|e| e.is_primary == Some(true));
    let phone_primary = case.merged.phones.is_empty()
        || case
            .merged
            .phones
            .iter()
            .any(|p| p.is_primary == Some(true));

    let score = if email_primary && phone_primary { 1.0 } else { 0.0 };
    let reason = match (email_primary, phone_primary) {
        (true, true) => "primary flags set".to_owned(),
        (false, _) => "no email flagged primary".to_owned(),
        (true, false) => "phones present but none flagged primary".to_owned(),
    };

    Evaluation {
        test_case_id: case.test_case_id.clone(),
        evaluator: "primary-flags-set",
        score,
        reason,
        diagnostics: serde_json::json!({
            "emailPrimary": email_primary,
            "phonePrimary": phone_primary,
            "phoneCount": case.merged.phones.len(),
        }),
    }
}
