//! Generation collaborator boundary.
//!
//! The merge pipeline treats text generation as an external, untrusted
//! collaborator with a single capability: given a prompt, return text.
//! [`Generator`] is that capability as a dyn-compatible trait so tests can
//! substitute canned or failing fakes; [`HttpGenerator`] is the production
//! implementation against an OpenAI-compatible chat-completions endpoint.

pub mod client;
pub mod error;
pub mod prompt;
pub mod retry;

pub use client::{Generator, HttpGenerator};
pub use error::GenError;
pub use prompt::build_merge_prompt;
pub use retry::retry_with_backoff;
