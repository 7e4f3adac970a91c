//! Core data model and pure procedures for media contact reconciliation.
//!
//! A contact often exists in several organizations' databases at once, each
//! holding a slightly different view of the same person. This crate defines
//! the shared wire shapes ([`Variant`], [`ContactData`]), the case-insensitive
//! union-dedup procedure that defines "no information loss" for multi-valued
//! fields, the company-id unanimity policy, and the variant-group quality
//! score. Everything here is pure and synchronous; the merge pipeline and
//! the generation client live in their own crates.

pub mod config;
pub mod contact;
pub mod dedup;
pub mod policy;
pub mod score;

pub use config::{build_gen_settings, load_gen_settings, ConfigError, GenSettings};
pub use contact::{
    ContactData, ContactEmail, ContactPhone, EmailType, MediaType, MergedContact, PhoneType,
    SocialProfile, StructuredName, Variant,
};
pub use dedup::{dedup_emails, union_emails, union_media_types, union_strings, StringListField};
pub use policy::unanimous_company_id;
pub use score::{score_variant_group, GroupScore};
