//! u-code items API client.
//!
//! This client wraps `ApiClient` from `uc-client` and provides typed methods
//! for the items endpoints: single-object CRUD, list reads (full and slim),
//! aggregation, bulk update/delete and many-to-many relations.

use serde::de::DeserializeOwned;
use serde::Serialize;
use ucode_sdk_client::{
    path_segment, ApiClient, ClientConfig, Config, ErrorKind, RawResponse, RequestMethod,
};

use crate::argument::Argument;
use crate::error::{Error, Result};
use crate::response::Response;

mod bulk;
mod items;
mod list;
mod relations;

/// Query flag carrying [`Argument::disable_faas`].
pub(crate) const FROM_OFS: &str = "from-ofs";

/// u-code items API client.
///
/// Every operation is a single awaited round-trip and returns the typed
/// payload together with a [`Response`] status wrapper. On failure the
/// [`Error`] carries the populated wrapper.
///
/// # Example
///
/// ```rust,ignore
/// use ucode_sdk_items::{Argument, Config, ItemsClient, Request};
///
/// let client = ItemsClient::new(Config::new("https://api.admin.u-code.io", "P-my-app-id"))?;
///
/// let (created, _) = client
///     .create_object(&Argument::new("houses").with_request(
///         Request::new().with("name", "house").with("room_count", 5),
///     ))
///     .await?;
///
/// let guid = created.object()["guid"].as_str().unwrap_or_default();
/// client
///     .delete(&Argument::new("houses").with_request(Request::guid(guid)))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemsClient {
    client: ApiClient,
}

impl ItemsClient {
    /// Create a new items client with default HTTP settings.
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(config)?;
        Ok(Self { client })
    }

    /// Create a new items client with custom HTTP settings.
    pub fn with_config(config: Config, client_config: ClientConfig) -> Result<Self> {
        let client = ApiClient::with_client_config(config, client_config)?;
        Ok(Self { client })
    }

    /// Create an items client from an existing ApiClient.
    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Get the underlying ApiClient.
    pub fn inner(&self) -> &ApiClient {
        &self.client
    }

    /// Get the SDK configuration.
    pub fn config(&self) -> &Config {
        self.client.config()
    }

    /// Get mutable access to the SDK configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        self.client.config_mut()
    }

    /// Build a bot notifier from the configured token and chat ids.
    #[cfg(feature = "notify")]
    pub fn notifier(&self) -> Result<ucode_sdk_client::BotNotifier> {
        Ok(ucode_sdk_client::BotNotifier::from_config(self.config())?)
    }

    /// Resolve and encode the target table of a call.
    fn table(&self, arg: &Argument, operation: &str) -> Result<String> {
        let table = self.config().resolve_table_slug(&arg.table_slug);
        if table.is_empty() {
            return Err(Error::rejected(
                format!("{operation}: table slug is required"),
                ErrorKind::InvalidArgument("no table slug given or configured".to_string()),
            ));
        }
        Ok(path_segment(table).into_owned())
    }

    /// Read and encode the `guid` of a call's payload.
    fn guid(arg: &Argument, operation: &str) -> Result<String> {
        match arg.request.guid_value() {
            Some(guid) => Ok(path_segment(&guid).into_owned()),
            None => Err(Error::rejected(
                format!("{operation}: guid is required"),
                ErrorKind::InvalidArgument("payload has no guid".to_string()),
            )),
        }
    }

    fn require(&self, enabled: bool, capability: &str, operation: &str) -> Result<()> {
        if enabled {
            Ok(())
        } else {
            Err(Error::rejected(
                format!("{operation}: {capability} is disabled"),
                ErrorKind::Unsupported(format!("{capability} capability is disabled")),
            ))
        }
    }

    /// Send one request for an operation.
    ///
    /// Stamps the auth headers for the call's app id and the `from-ofs`
    /// flag, then any extra query parameters. The body is encoded before
    /// anything is sent.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: RequestMethod,
        path: &str,
        arg: &Argument,
        query: &[(&str, String)],
        body: Option<&B>,
        operation: &str,
    ) -> Result<RawResponse> {
        let url = self.client.url(path);
        let mut request = self
            .client
            .request(method, &url, arg.app_id.as_deref())
            .query(FROM_OFS, arg.disable_faas.to_string());

        for (name, value) in query {
            request = request.query(*name, value.as_str());
        }

        if let Some(body) = body {
            request = request
                .json(body)
                .map_err(|e| Error::new(format!("{operation}: error while encoding request"), e, &[]))?;
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| Error::new(format!("{operation}: error while sending request"), e, &[]))
    }

    /// Parse an operation's response body into its typed payload.
    fn parse<T: DeserializeOwned>(raw: &RawResponse, operation: &str) -> Result<(T, Response)> {
        match raw.json() {
            Ok(payload) => Ok((payload, Response::done())),
            Err(e) => Err(Error::new(
                format!("{operation}: error while parsing response"),
                e,
                raw.body(),
            )),
        }
    }
}
