//! Error types for the cookie spec crate.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing, validating or formatting cookies.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `Set-Cookie` header itself is unusable.
    #[error("Malformed cookie header: {0}")]
    MalformedHeader(String),

    /// An attribute handler refused a raw attribute value.
    #[error("Malformed '{attribute}' attribute: {reason}")]
    MalformedAttribute {
        attribute: &'static str,
        reason: String,
    },

    /// Cookie parsed fine but breaks an attribute rule for its origin.
    #[error("Cookie rejected by '{attribute}' rule: {reason}")]
    Rejected {
        attribute: &'static str,
        reason: String,
    },

    /// Caller passed an argument the operation cannot work with.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Header value could not be represented as an `http` header value.
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    /// Header name could not be represented as an `http` header name.
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration could not be deserialized.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed header error.
    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader(message.into())
    }

    /// Create a malformed attribute error.
    pub fn malformed_attribute(attribute: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedAttribute {
            attribute,
            reason: reason.into(),
        }
    }

    /// Create a validation failure.
    pub fn rejected(attribute: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            attribute,
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// True for errors raised while reading a `Set-Cookie` line.
    ///
    /// Callers should drop the offending header and keep going.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedHeader(_) | Self::MalformedAttribute { .. })
    }

    /// True for cookies that parsed but must not be stored.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
