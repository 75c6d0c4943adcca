use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of a slug before the uniqueness suffix
pub const MAX_SLUG_LEN: usize = 50;

/// Number of trailing clock digits used as the slug suffix
pub const SUFFIX_DIGITS: usize = 6;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern should be valid"));

/// Local part of an email: everything before the first `@`, or the whole input
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

/// Domain of an email: the text after the first `@` (up to any further `@`)
pub fn domain(email: &str) -> Option<&str> {
    email.split('@').nth(1)
}

/// Domain root: the domain up to its first `.`; `None` when missing or empty
pub fn domain_root(email: &str) -> Option<&str> {
    domain(email)
        .and_then(|d| d.split('.').next())
        .filter(|root| !root.is_empty())
}

/// Convert a title into a URL-safe slug
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into one
/// `-`, trims hyphens from both ends and caps the length. Deterministic.
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let replaced = NON_ALNUM.replace_all(&lowered, "-");
    let trimmed = replaced.trim_matches('-');

    // Replaced text is pure ASCII, so byte and char positions agree
    let capped = if trimmed.len() > MAX_SLUG_LEN {
        &trimmed[..MAX_SLUG_LEN]
    } else {
        trimmed
    };

    // Truncation can land on a separator
    capped.trim_end_matches('-').to_string()
}

/// Last six digits of the epoch-millisecond clock
pub fn slug_suffix(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(SUFFIX_DIGITS);
    millis[start..].to_string()
}

/// Slug with the time-derived uniqueness suffix appended
pub fn unique_slug(title: &str, now: DateTime<Utc>) -> String {
    let slug = generate_slug(title);
    let suffix = slug_suffix(now);
    if slug.is_empty() {
        suffix
    } else {
        format!("{}-{}", slug, suffix)
    }
}
