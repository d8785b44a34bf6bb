//! Authenticated u-code client.
//!
//! `ApiClient` combines the SDK [`Config`] with an HTTP executor and stamps
//! the API-key headers on every request it builds.
//!
//! ## Security
//!
//! - The application id is redacted in Debug output (via [`Config`])
//! - Request bodies and headers are skipped in tracing spans

use bytes::Bytes;
use serde::Serialize;
use tracing::instrument;

use crate::client::UcodeHttpClient;
use crate::config::{ClientConfig, Config};
use crate::error::Result;
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::RawResponse;

/// High-level u-code API client.
///
/// Designed to be wrapped by API-specific crates (uc-items).
///
/// # Example
///
/// ```rust,ignore
/// use ucode_sdk_client::{ApiClient, Config, RequestMethod};
///
/// let client = ApiClient::new(Config::new("https://api.admin.u-code.io", "P-app"))?;
///
/// let body = client
///     .do_request(&client.url("/v2/items/houses/some-guid"), RequestMethod::Get, None::<&()>, &[])
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: UcodeHttpClient,
    config: Config,
}

impl ApiClient {
    /// Create a new client with default HTTP settings.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_client_config(config, ClientConfig::default())
    }

    /// Create a new client with custom HTTP settings.
    pub fn with_client_config(config: Config, client_config: ClientConfig) -> Result<Self> {
        url::Url::parse(config.base_url())?;
        let http = UcodeHttpClient::new(client_config)?;
        Ok(Self { http, config })
    }

    /// Get the SDK configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable access to the SDK configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Get the underlying HTTP client.
    pub fn http(&self) -> &UcodeHttpClient {
        &self.http
    }

    /// Build the full URL for a path relative to the base URL.
    ///
    /// Example: `url("/v2/items/houses")` -> `https://api.admin.u-code.io/v2/items/houses`
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url(),
            path.trim_start_matches('/')
        )
    }

    /// Create an authenticated request builder.
    ///
    /// `app_id` overrides the configured application id when non-empty.
    /// The configured request timeout is applied when positive.
    pub fn request(&self, method: RequestMethod, url: &str, app_id: Option<&str>) -> RequestBuilder {
        RequestBuilder::new(method, url)
            .api_key(self.config.resolve_app_id(app_id))
            .timeout(self.config.request_timeout())
    }

    /// Execute a request and return the buffered response.
    pub async fn execute(&self, request: RequestBuilder) -> Result<RawResponse> {
        self.http.execute(request).await
    }

    /// Send a JSON request to any URL and return the raw response body.
    ///
    /// The API-key headers for the configured application id are always
    /// present; entries in `headers` are applied after them and win on
    /// conflicts. The body is encoded before the request is built, so an
    /// unencodable body fails without touching the network. The status code
    /// is not inspected.
    #[instrument(skip(self, body, headers), fields(method = %method, url = %url))]
    pub async fn do_request<B: Serialize + ?Sized>(
        &self,
        url: &str,
        method: RequestMethod,
        body: Option<&B>,
        headers: &[(&str, &str)],
    ) -> Result<Bytes> {
        let mut request = self.request(method, url, None);
        if let Some(body) = body {
            request = request.json(body)?;
        }
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = self.http.execute(request).await?;
        Ok(response.into_bytes())
    }
}

/// Percent-encode a value for use as a single URL path segment.
pub fn path_segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}
