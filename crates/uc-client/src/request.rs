//! HTTP request building with u-code API-key headers.

use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{Error, Result};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// Upper-case method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for HTTP requests.
///
/// The body is encoded when it is attached, so a value that cannot be
/// represented as JSON is rejected before anything touches the network.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) body: Option<Bytes>,
    pub(crate) timeout: Option<Duration>,
    /// The URL embeds a secret and must not be logged.
    pub(crate) redact_url: bool,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            query_params: Vec::new(),
            body: None,
            timeout: None,
            redact_url: false,
        }
    }

    /// Set the u-code API-key headers for the given application id.
    pub fn api_key(self, app_id: impl Into<String>) -> Self {
        self.header("authorization", crate::AUTHORIZATION_SCHEME)
            .header(crate::API_KEY_HEADER, app_id)
    }

    /// Add a header, replacing any earlier value under the same name.
    ///
    /// Names are case-insensitive and stored lowercased.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Set JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let encoded = serde_json::to_vec(body).map_err(Error::serialization)?;
        self.body = Some(Bytes::from(encoded));
        Ok(self.header("Content-Type", "application/json"))
    }

    /// Set a per-request deadline. A zero duration clears it.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    /// Keep the URL out of logs and spans (for URLs that embed a token).
    pub fn redact_url(mut self) -> Self {
        self.redact_url = true;
        self
    }

    /// The URL as it may appear in logs.
    pub(crate) fn loggable_url(&self) -> &str {
        if self.redact_url {
            "[REDACTED]"
        } else {
            &self.url
        }
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The target URL (without query parameters added through [`query`](Self::query)).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The encoded body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}
