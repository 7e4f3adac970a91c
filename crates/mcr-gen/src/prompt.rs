//! Merge prompt construction.

use mcr_core::Variant;

/// Build the fixed merge instruction with the serialized variants appended.
///
/// The instruction describes the required output shape and the merge rules
/// the pipeline expects; the validator still checks everything, so the
/// prompt is a contract proposal, not a guarantee.
#[must_use]
pub fn build_merge_prompt(variants: &[Variant]) -> String {
    // Serialization of these derive types cannot fail.
    let serialized =
        serde_json::to_string_pretty(variants).unwrap_or_else(|_| String::from("[]"));

    format!(
        r#"You are a data consolidation assistant. Merge the following contact records, which describe the same person as seen by different organizations, into ONE canonical contact record.

## Output Shape

Return exactly one JSON object (no top-level array, no additional fields, no commentary) with this shape:

- name: {{ firstName, lastName, title?, suffix? }}
- displayName (string, required)
- emails (array, required, at least one entry): {{ email, type: business|private|other, isPrimary?, isVerified? }}
- phones (array, optional): {{ number, type: business|mobile|private|other, isPrimary? }}
- position?, department?, companyName?, companyId? (strings)
- hasMediaProfile (boolean, required)
- beats (array of strings, optional)
- mediaTypes (array, optional, subset of: print, online, tv, radio, podcast)
- publications (array of strings, optional)
- socialProfiles (array, optional): {{ platform, url, handle? }}
- photoUrl?, website? (strings)

## Merge Rules

1. Name: use the most complete form. If any record carries a title (e.g. "Dr."), preserve it.
2. Emails, phones, beats, publications, mediaTypes: take the union across all records and remove duplicates (emails compare case-insensitively by address). Never drop an entry that appears in any record.
3. Exactly one email must have isPrimary set to true. If phones are present, exactly one phone must have isPrimary set to true.
4. position, department, companyName: choose the most complete value from any record.
5. companyId: only include it when every record that has one agrees on the same value. Never invent identifiers.
6. Do not add fields that are not listed above.

## Contact Records

{serialized}
"#
    )
}
