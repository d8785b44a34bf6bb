//! Buffered HTTP responses.

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// A fully read HTTP response.
///
/// The u-code API reports most failures inside a JSON body, so the executor
/// never turns a status code into an error; callers inspect the body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: u16,
    content_type: Option<String>,
    body: Bytes,
}

impl RawResponse {
    pub(crate) fn new(status: u16, content_type: Option<String>, body: Bytes) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Borrow the raw body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Into::into)
    }

    /// Take the raw body.
    pub fn into_bytes(self) -> Bytes {
        self.body
    }
}
