//! SDK and HTTP client configuration.

use std::path::Path;
use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Environment variable holding the application id.
pub const APP_ID_ENV: &str = "APP_ID";

/// Settings read by every u-code operation.
///
/// The application id and bot token are redacted in Debug output.
#[derive(Clone)]
pub struct Config {
    base_url: String,
    app_id: String,
    table_slug: String,
    bot_token: String,
    notification_ids: Vec<String>,
    request_timeout: Duration,
    capabilities: Capabilities,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("app_id", &redact(&self.app_id))
            .field("table_slug", &self.table_slug)
            .field("bot_token", &redact(&self.bot_token))
            .field("notification_ids", &self.notification_ids)
            .field("request_timeout", &self.request_timeout)
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "[REDACTED]"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_BASE_URL.to_string(),
            app_id: String::new(),
            table_slug: String::new(),
            bot_token: String::new(),
            notification_ids: Vec::new(),
            request_timeout: Duration::ZERO,
            capabilities: Capabilities::default(),
        }
    }
}

impl Config {
    /// Create a configuration for the given base URL and application id.
    pub fn new(base_url: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url).with_app_id(app_id)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.set_base_url(url);
        self
    }

    /// Set the default application id.
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.set_app_id(app_id);
        self
    }

    /// Set the default table slug.
    pub fn with_table_slug(mut self, slug: impl Into<String>) -> Self {
        self.set_table_slug(slug);
        self
    }

    /// Set the bot token.
    pub fn with_bot_token(mut self, token: impl Into<String>) -> Self {
        self.set_bot_token(token);
        self
    }

    /// Set the chat ids notifications are sent to.
    pub fn with_notification_ids(mut self, ids: Vec<String>) -> Self {
        self.set_notification_ids(ids);
        self
    }

    /// Set the per-request timeout. Zero means no explicit deadline.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.set_request_timeout(timeout);
        self
    }

    /// Set the enabled API capabilities.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.set_capabilities(capabilities);
        self
    }

    /// Set the base URL. A trailing `/` is dropped.
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into().trim_end_matches('/').to_string();
    }

    /// Set the default application id.
    pub fn set_app_id(&mut self, app_id: impl Into<String>) {
        self.app_id = app_id.into();
    }

    /// Set the application id from `APP_ID`, loading `.env` from the
    /// working directory first when one exists.
    ///
    /// A missing `.env` is fine; a malformed one is an error.
    pub fn set_app_id_from_env(&mut self) -> Result<()> {
        optional_env_file(dotenvy::dotenv())?;
        self.app_id = read_app_id()?;
        Ok(())
    }

    /// Set the application id from `APP_ID` after loading the given env file.
    ///
    /// Values in the file take precedence over the process environment.
    pub fn set_app_id_from_env_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        dotenvy::from_path_override(path).map_err(|e| {
            Error::with_source(
                ErrorKind::MissingConfiguration(format!(
                    "cannot load env file {}",
                    path.display()
                )),
                e,
            )
        })?;
        self.app_id = read_app_id()?;
        Ok(())
    }

    /// Set the default table slug.
    pub fn set_table_slug(&mut self, slug: impl Into<String>) {
        self.table_slug = slug.into();
    }

    /// Set the bot token.
    pub fn set_bot_token(&mut self, token: impl Into<String>) {
        self.bot_token = token.into();
    }

    /// Set the chat ids notifications are sent to.
    pub fn set_notification_ids(&mut self, ids: Vec<String>) {
        self.notification_ids = ids;
    }

    /// Set the per-request timeout. Zero means no explicit deadline.
    pub fn set_request_timeout(&mut self, timeout: Duration) {
        self.request_timeout = timeout;
    }

    /// Set the enabled API capabilities.
    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.capabilities = capabilities;
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the default application id.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Get the default table slug.
    pub fn table_slug(&self) -> &str {
        &self.table_slug
    }

    /// Get the bot token.
    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    /// Get the notification chat ids.
    pub fn notification_ids(&self) -> &[String] {
        &self.notification_ids
    }

    /// Get the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Get the enabled API capabilities.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// The per-call override when non-empty, otherwise the configured default.
    pub fn resolve_app_id<'a>(&'a self, app_id: Option<&'a str>) -> &'a str {
        match app_id {
            Some(id) if !id.is_empty() => id,
            _ => &self.app_id,
        }
    }

    /// The per-call table when non-empty, otherwise the configured default.
    pub fn resolve_table_slug<'a>(&'a self, table_slug: &'a str) -> &'a str {
        if table_slug.is_empty() {
            &self.table_slug
        } else {
            table_slug
        }
    }
}

fn optional_env_file<T>(loaded: std::result::Result<T, dotenvy::Error>) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::with_source(
            ErrorKind::MissingConfiguration("cannot load .env file".to_string()),
            e,
        )),
    }
}

fn read_app_id() -> Result<String> {
    match std::env::var(APP_ID_ENV) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::new(ErrorKind::MissingConfiguration(format!(
            "{APP_ID_ENV} environment variable not set"
        )))),
    }
}

/// Optional API surfaces a deployment supports.
///
/// Older u-code deployments lack the many-to-many and aggregation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// `/v2/items/many-to-many` append and delete.
    pub many_to_many: bool,
    /// `/v2/items/{table}/aggregation`.
    pub aggregation: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            many_to_many: true,
            aggregation: true,
        }
    }
}

impl Capabilities {
    /// Only the plain CRUD endpoints.
    pub fn crud_only() -> Self {
        Self {
            many_to_many: false,
            aggregation: false,
        }
    }
}

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Default request timeout. `None` means no client-wide deadline;
    /// individual requests may still carry their own.
    pub timeout: Option<Duration>,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Pool idle timeout.
    pub pool_idle_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_max_idle_per_host: usize,
    /// User-Agent header value.
    pub user_agent: String,
    /// Accept gzip/deflate compressed responses.
    pub accept_compressed: bool,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            accept_compressed: true,
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the default request timeout. A zero duration clears it.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set pool idle timeout.
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Accept compressed responses.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sdk_config_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url(), "https://api.admin.u-code.io");
        assert!(config.app_id().is_empty());
        assert!(config.request_timeout().is_zero());
        assert_eq!(config.capabilities(), Capabilities::default());
    }

    #[test]
    fn test_sdk_config_setters() {
        let mut config = Config::new("https://api.example.com/", "P-default");
        config.set_table_slug("houses");
        config.set_bot_token("123:abc");
        config.set_notification_ids(vec!["42".to_string()]);
        config.set_request_timeout(Duration::from_secs(30));

        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(config.app_id(), "P-default");
        assert_eq!(config.table_slug(), "houses");
        assert_eq!(config.bot_token(), "123:abc");
        assert_eq!(config.notification_ids(), ["42".to_string()]);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_resolve_app_id() {
        let config = Config::new("https://api.example.com", "P-default");
        assert_eq!(config.resolve_app_id(None), "P-default");
        assert_eq!(config.resolve_app_id(Some("")), "P-default");
        assert_eq!(config.resolve_app_id(Some("P-other")), "P-other");
    }

    #[test]
    fn test_resolve_table_slug() {
        let config = Config::default().with_table_slug("houses");
        assert_eq!(config.resolve_table_slug(""), "houses");
        assert_eq!(config.resolve_table_slug("rooms"), "rooms");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::new("https://api.example.com", "P-secret").with_bot_token("123:token");
        let debug = format!("{config:?}");
        assert!(!debug.contains("P-secret"));
        assert!(!debug.contains("123:token"));
        assert!(debug.contains("[REDACTED]"));
    }

    // The only test touching APP_ID, so no other test races on the variable.
    #[test]
    fn test_app_id_from_env_file() {
        let mut config = Config::default();

        let missing = config
            .set_app_id_from_env_file("/definitely/not/here/.env")
            .unwrap_err();
        assert!(missing.is_missing_configuration());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "APP_ID=P-from-file").unwrap();
        config.set_app_id_from_env_file(file.path()).unwrap();
        assert_eq!(config.app_id(), "P-from-file");

        std::env::set_var(APP_ID_ENV, "");
        let empty = config.set_app_id_from_env().unwrap_err();
        assert!(empty.is_missing_configuration());
        assert_eq!(config.app_id(), "P-from-file");
        std::env::remove_var(APP_ID_ENV);
    }

    #[test]
    fn test_optional_env_file() {
        assert!(optional_env_file(dotenvy::from_path("/definitely/not/here/.env")).is_ok());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this line has no equals sign").unwrap();
        let err = optional_env_file(dotenvy::from_path(file.path())).unwrap_err();
        assert!(err.is_missing_configuration());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_crud_only_capabilities() {
        let caps = Capabilities::crud_only();
        assert!(!caps.many_to_many);
        assert!(!caps.aggregation);
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.timeout.is_none());
        assert!(config.accept_compressed);
        assert!(config.enable_tracing);
        assert!(config.user_agent.starts_with("ucode-sdk/"));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .with_timeout(Duration::from_secs(60))
            .with_compression(false)
            .with_user_agent("custom-agent/1.0")
            .with_tracing(false)
            .build();

        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
        assert!(!config.accept_compressed);
        assert!(!config.enable_tracing);
        assert_eq!(config.user_agent, "custom-agent/1.0");
    }

    #[test]
    fn test_zero_timeout_means_no_deadline() {
        let config = ClientConfig::builder()
            .with_timeout(Duration::ZERO)
            .build();
        assert!(config.timeout.is_none());
    }
}
