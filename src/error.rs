// Error types for octodash.
// Handles GitHub API errors, cache errors, and general application errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("User '{0}' not found on GitHub")]
    UserNotFound(String),

    #[error("GitHub API rate limit exceeded, resets at {reset_at}")]
    RateLimited {
        reset_at: String,
        authenticated: bool,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DashError>;
