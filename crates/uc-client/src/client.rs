//! Core HTTP executor for u-code APIs.

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::RawResponse;

/// HTTP client for the u-code API.
///
/// Executes exactly one round-trip per call. There is no retry layer:
/// a failed request surfaces to the caller immediately.
#[derive(Debug, Clone)]
pub struct UcodeHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl UcodeHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Transport(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, url)
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, url)
    }

    /// Execute a request and buffer the full response body.
    ///
    /// Non-2xx responses are returned as-is; only failures to obtain a
    /// response at all are errors.
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.loggable_url()))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<RawResponse> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), &request.url);

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if !request.query_params.is_empty() {
            req = req.query(&request.query_params);
        }

        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        if self.config.enable_tracing {
            debug!(
                method = %request.method,
                url = %request.loggable_url(),
                "Sending request"
            );
        }

        let redact = request.redact_url;
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req.send().await.map_err(|e| scrub(e, redact))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| body_read_failure(e, redact))?;

        if self.config.enable_tracing {
            let content_length = body.len();
            if (200..300).contains(&status) {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        Ok(RawResponse::new(status, content_type, body))
    }
}

/// Drop the URL from errors for requests whose URL embeds a secret.
fn scrub(err: reqwest::Error, redact: bool) -> Error {
    if redact {
        err.without_url().into()
    } else {
        err.into()
    }
}

/// A response that arrived but could not be read is still a transport failure.
fn body_read_failure(err: reqwest::Error, redact: bool) -> Error {
    let err = if redact { err.without_url() } else { err };
    let kind = if err.is_timeout() {
        ErrorKind::Timeout
    } else {
        ErrorKind::Transport(err.to_string())
    };
    Error::with_source(kind, err)
}
