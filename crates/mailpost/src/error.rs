//! Error types for composing and sending mail.

/// Result type alias for mail operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Mail client error types.
///
/// Everything except [`Error::Transport`] is raised while validating input,
/// strictly before any network request is attempted.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Email string without an `@`.
    #[error("Invalid email address: {0:?}")]
    InvalidAddress(String),

    /// Recipient list is empty or larger than the API allows.
    #[error("Recipient list must hold 1 to {max} addresses, got {count}")]
    RecipientListOutOfBounds {
        /// Number of addresses supplied.
        count: usize,
        /// Upper bound accepted by the API.
        max: usize,
    },

    /// No per-call sender and no client default.
    #[error("No from address given and no default sender configured")]
    MissingFromAddress,

    /// Email has no body parts.
    #[error("Email must have at least one content part")]
    EmptyContent,

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by the transport, surfaced as-is.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// Returns true if the error was raised by local validation.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAddress(_)
                | Self::RecipientListOutOfBounds { .. }
                | Self::MissingFromAddress
                | Self::EmptyContent
        )
    }
}

/// Errors produced while delivering a request over HTTP.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP client error (connection, TLS, serialization, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status.
    #[error("API error {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body returned by the API.
        body: String,
    },

    /// Deferred send task ended without producing a result.
    #[error("Send task failed: {0}")]
    Join(String),
}

impl TransportError {
    /// Creates a status error from a code and response body.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code, if the API produced one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Join(_) => None,
        }
    }
}
