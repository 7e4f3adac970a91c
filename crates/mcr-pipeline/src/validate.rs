//! Parsing and structural validation of generation output.
//!
//! The collaborator returns unstructured text that is *expected* to contain
//! one JSON object in the merged-contact shape. Nothing here is trusted:
//! Markdown fences are stripped, the first balanced object is extracted,
//! top-level arrays are rejected, and required fields are checked after the
//! serde parse. Failures are values ([`ValidationError`]), not exceptions —
//! the orchestrator routes them to repair or fallback.

use regex::Regex;

use mcr_core::ContactData;

use crate::error::ValidationError;

/// Parse raw generation text into a candidate contact.
///
/// # Errors
///
/// - [`ValidationError::TopLevelArray`] if the text is a JSON array.
/// - [`ValidationError::NoJsonObject`] if no balanced object can be found.
/// - [`ValidationError::Json`] if the object does not match the shape.
pub fn parse_candidate(raw: &str) -> Result<ContactData, ValidationError> {
    let stripped = strip_code_fences(raw);
    let trimmed = stripped.trim();

    if trimmed.starts_with('[') {
        return Err(ValidationError::TopLevelArray);
    }

    let object = extract_first_object(trimmed).ok_or(ValidationError::NoJsonObject)?;
    let candidate: ContactData = serde_json::from_str(object)?;
    Ok(candidate)
}

/// Validate required fields of a candidate.
///
/// Required: a name with at least one non-empty component, a non-empty
/// `displayName`, and a non-empty `emails` array. An empty `emails` array
/// is reported as the distinct [`ValidationError::EmptyEmails`] so the
/// caller can attempt repair before falling back.
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate_candidate(candidate: &ContactData) -> Result<(), ValidationError> {
    if candidate.name.first_name.trim().is_empty() && candidate.name.last_name.trim().is_empty() {
        return Err(ValidationError::MissingRequired("name"));
    }
    if candidate.display_name.trim().is_empty() {
        return Err(ValidationError::MissingRequired("displayName"));
    }
    if candidate.emails.is_empty() {
        return Err(ValidationError::EmptyEmails);
    }
    Ok(())
}

/// If the text carries a fenced code block, return the first block's body;
/// otherwise return the text unchanged.
fn strip_code_fences(raw: &str) -> &str {
    let re = Regex::new(r"(?s)```(?:json)?\s*(.*?)```").expect("valid fence regex");
    match re.captures(raw) {
        Some(caps) => caps.get(1).map_or(raw, |m| m.as_str()),
        None => raw,
    }
}

/// Extract the first balanced top-level JSON object from `text`, honouring
/// string literals and escapes so braces inside values do not miscount.
fn extract_first_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
