//! Variant-group quality score.
//!
//! Grades how promising a group of variants is before a merge: cross-
//! organization coverage dominates, completeness signals (media profile,
//! verified newsroom email domain, phones, beats, social profiles) add
//! smaller bonuses. Maximum total is 105.

use std::collections::HashSet;

use crate::contact::Variant;

/// Email domains of established newsrooms. A contact reachable under one of
/// these counts as having a verified media address.
const VERIFIED_DOMAINS: &[&str] = &[
    "spiegel.de",
    "zeit.de",
    "faz.net",
    "sueddeutsche.de",
    "taz.de",
    "bild.de",
    "welt.de",
    "handelsblatt.com",
    "wiwo.de",
    "manager-magazin.de",
];

/// Score breakdown for a variant group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupScore {
    pub total: u32,
    pub organizations: u32,
    pub media_profile: u32,
    pub verified_email: u32,
    pub phones: u32,
    pub beats: u32,
    pub social_profiles: u32,
}

/// Score a group of variants describing the same contact.
#[must_use]
pub fn score_variant_group(variants: &[Variant]) -> GroupScore {
    let unique_orgs: HashSet<&str> = variants
        .iter()
        .map(|v| v.organization_id.as_str())
        .collect();

    let mut organizations = 0;
    if unique_orgs.len() >= 2 {
        organizations = 50;
    }
    if unique_orgs.len() >= 3 {
        organizations += 10;
    }
    if unique_orgs.len() >= 4 {
        organizations += 10;
    }

    let mut media_profile = 0;
    let mut verified_email = 0;
    let mut phones = 0;
    let mut beats = 0;
    let mut social_profiles = 0;

    for variant in variants {
        let data = &variant.contact_data;

        if data.has_media_profile {
            media_profile = 10;
        }
        if data.emails.iter().any(|e| has_verified_domain(&e.email)) {
            verified_email = 10;
        }
        if !data.phones.is_empty() {
            phones = 5;
        }
        if !data.beats.is_empty() {
            beats = 5;
        }
        if !data.social_profiles.is_empty() {
            social_profiles = 5;
        }
    }

    GroupScore {
        total: organizations + media_profile + verified_email + phones + beats + social_profiles,
        organizations,
        media_profile,
        verified_email,
        phones,
        beats,
        social_profiles,
    }
}

fn has_verified_domain(address: &str) -> bool {
    address
        .rsplit_once('@')
        .is_some_and(|(_, domain)| VERIFIED_DOMAINS.contains(&domain.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactData, ContactEmail, EmailType, StructuredName};

    fn variant(org: &str, data: ContactData) -> Variant {
        Variant {
            organization_id: org.to_owned(),
            organization_name: org.to_owned(),
            contact_id: format!("{org}-c"),
            contact_data: data,
        }
    }

    fn minimal_data() -> ContactData {
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
            has_media_profile: false,
            beats: Vec::new(),
            media_types: Vec::new(),
            publications: Vec::new(),
            social_profiles: Vec::new(),
            photo_url: None,
            website: None,
        }
    }

    #[test]
    fn single_org_scores_no_organization_bonus() {
        let score = score_variant_group(&[variant("a", minimal_data())]);
        assert_eq!(score.organizations, 0);
        assert_eq!(score.total, 0);
    }

    #[test]
    fn organization_bonus_scales_with_unique_orgs() {
        let two = score_variant_group(&[variant("a", minimal_data()), variant("b", minimal_data())]);
        assert_eq!(two.organizations, 50);

        let four = score_variant_group(&[
            variant("a", minimal_data()),
            variant("b", minimal_data()),
            variant("c", minimal_data()),
            variant("d", minimal_data()),
        ]);
        assert_eq!(four.organizations, 70);
    }

    #[test]
    fn duplicate_orgs_count_once() {
        let score = score_variant_group(&[variant("a", minimal_data()), variant("a", minimal_data())]);
        assert_eq!(score.organizations, 0);
    }

    #[test]
    fn verified_newsroom_domain_adds_ten() {
        let mut data = minimal_data();
        data.emails = vec![ContactEmail {
            email: "a.weber@Spiegel.DE".to_owned(),
            kind: EmailType::Business,
            is_primary: None,
            is_verified: None,
        }];
        let score = score_variant_group(&[variant("a", data)]);
        assert_eq!(score.verified_email, 10);
    }

    #[test]
    fn completeness_bonuses_are_capped_per_group() {
        let mut a = minimal_data();
        a.has_media_profile = true;
        a.beats = vec!["Tech".to_owned()];
        let mut b = minimal_data();
        b.has_media_profile = true;
        b.beats = vec!["Gaming".to_owned()];

        let score = score_variant_group(&[variant("a", a), variant("b", b)]);
        assert_eq!(score.media_profile, 10);
        assert_eq!(score.beats, 5);
        assert_eq!(score.total, 50 + 10 + 5);
    }
}
