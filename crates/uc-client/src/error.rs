//! Error types for uc-client.

/// Result type alias for uc-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for uc-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Wrap a JSON encoding failure.
    pub fn serialization(err: serde_json::Error) -> Self {
        Self::with_source(ErrorKind::Serialization(err.to_string()), err)
    }

    /// Returns true if the request never produced a response
    /// (bad URL, connection failure, deadline exceeded).
    pub fn is_transport(&self) -> bool {
        self.kind.is_transport()
    }

    /// Returns true if this is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Returns true if a request body could not be encoded.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization(_))
    }

    /// Returns true if a response body did not match the expected shape.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization(_))
    }

    /// Returns true if a required configuration value is absent.
    pub fn is_missing_configuration(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingConfiguration(_))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Request body could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Response body does not match the expected shape.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other failure while sending the request or reading the body.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A required configuration value is absent.
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    /// A per-call argument is malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is disabled for this client.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

impl ErrorKind {
    /// Returns true for the kinds raised while moving bytes over the wire.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::Timeout
                | ErrorKind::Connection(_)
                | ErrorKind::InvalidUrl(_)
                | ErrorKind::Transport(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_builder() {
            ErrorKind::InvalidUrl(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Deserialization(err.to_string())
        } else {
            ErrorKind::Transport(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

/// Parsing is the common case; encoding sites call [`Error::serialization`].
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Deserialization(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
