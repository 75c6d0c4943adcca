use thiserror::Error;

/// Result type alias for store and configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the store and configuration boundary.
///
/// Page generation itself never fails; only persistence and setup do.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be used
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network error talking to the backend
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Backend answered with a non-success status
    #[error("Backend error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A page with the same slug already exists
    #[error("Slug already taken: {0}")]
    DuplicateSlug(String),

    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),
}
