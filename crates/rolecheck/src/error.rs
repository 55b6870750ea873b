//! Error types for role reconciliation.
//!
//! Every failure here is terminal for the run: there is no retry and no
//! partial-result mode. Discrepancies between the two sources are ordinary
//! data ([`crate::Discrepancy`]), not errors.

/// Result type alias for rolecheck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching or parsing either role source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP request failed: {message}")]
    Http {
        /// Error message.
        message: String,
        /// HTTP status code if available.
        status: Option<u16>,
    },

    /// The `GITHUB_TOKEN` credential is not set.
    #[error("'GITHUB_TOKEN' variable not found")]
    MissingToken,

    /// The documentation page has no `<table>` at the expected position.
    #[error("no <table> found at index {index} in the documentation page")]
    TableNotFound {
        /// Zero-based position of the table in document order.
        index: usize,
    },

    /// Malformed or incomplete response body.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The GitHub `content` field was not valid base64.
    #[error("invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl Error {
    /// Create an HTTP error.
    pub fn http(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Http {
            message: message.into(),
            status,
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => Self::Http {
                message: format!("HTTP {code}"),
                status: Some(code),
            },
            other => Self::Http {
                message: other.to_string(),
                status: None,
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}
