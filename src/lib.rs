//! Lead page generation for a lead-capture site.
//!
//! [`MagicPageGenerator`] turns an email address into a complete, publishable
//! page definition. [`LeadPages`] stores those pages through a [`PageStore`]
//! and reads the dashboard back.

pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod pages;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use generator::{
    MagicPageGenerator, Pick, generate_content, generate_share_message, generate_slug,
};
pub use models::{PageDefinition, Session};
pub use pages::LeadPages;
pub use store::PageStore;

/// Generate a page from an email with the default tables, thread RNG and current time
pub fn generate_magic_page(email: &str) -> PageDefinition {
    MagicPageGenerator::default().generate_magic_page(email)
}
