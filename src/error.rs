use thiserror::Error;

impl From<serde_json::Error> for RetrievalError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(format!("JSON decoding error: {}", err))
    }
}

impl From<reqwest::Error> for RetrievalError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(format!("HTTP transport error: {}", err))
    }
}

/// Failures while obtaining data from the explorer API.
///
/// These are collaborator-origin errors: they describe problems reaching or
/// decoding the remote log, never the cryptographic validity of a proof.
/// A failed retrieval must never be reported as a failed verification.
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Explorer API rejected credentials (HTTP 401)")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Explorer API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

impl RetrievalError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Transport failures and server-side errors are transient; credential
    /// rejections and missing resources are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpError(_) => true,
            Self::ApiError { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
