//! Error types for uc-items.

use ucode_sdk_client::ErrorKind;

use crate::response::Response;

pub type Result<T> = std::result::Result<T, Error>;

/// A failed items operation.
///
/// Carries the status wrapper the operation produced (`status = "error"`,
/// with the message, raw body and underlying error text in `data`) next to
/// the underlying client error.
#[derive(Debug, thiserror::Error)]
#[error("{message}: {source}")]
pub struct Error {
    /// Human-readable description of the step that failed.
    pub message: String,
    /// The populated status wrapper.
    pub response: Response,
    #[source]
    pub source: ucode_sdk_client::Error,
}

impl Error {
    /// Build an operation error; `body` is the raw response body, if one arrived.
    pub(crate) fn new(
        message: impl Into<String>,
        source: ucode_sdk_client::Error,
        body: &[u8],
    ) -> Self {
        let message = message.into();
        let response = Response::error(&message, &String::from_utf8_lossy(body), &source);
        Self {
            message,
            response,
            source,
        }
    }

    /// Build an error for a call rejected before any request was made.
    pub(crate) fn rejected(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self::new(message, ucode_sdk_client::Error::new(kind), &[])
    }

    /// The kind of the underlying failure.
    pub fn kind(&self) -> &ErrorKind {
        &self.source.kind
    }

    /// Returns true if no response was obtained.
    pub fn is_transport(&self) -> bool {
        self.source.is_transport()
    }

    /// Returns true if the response body did not match the expected shape.
    pub fn is_deserialization(&self) -> bool {
        self.source.is_deserialization()
    }

    /// Returns true if the request body could not be encoded.
    pub fn is_serialization(&self) -> bool {
        self.source.is_serialization()
    }
}

impl From<ucode_sdk_client::Error> for Error {
    fn from(err: ucode_sdk_client::Error) -> Self {
        Self::new("client error", err, &[])
    }
}
