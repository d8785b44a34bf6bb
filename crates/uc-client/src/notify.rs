//! Bot notifications for operational logging.
//!
//! Posts plain-text messages to a Telegram-compatible bot API
//! (`POST {api}/bot{token}/sendMessage`). This is a side channel: it shares
//! the HTTP stack with the data-access client but nothing in the SDK depends
//! on it.

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::client::UcodeHttpClient;
use crate::config::{ClientConfig, Config};
use crate::error::{Error, ErrorKind, Result};

/// Default bot API base URL.
pub const DEFAULT_BOT_API_URL: &str = "https://api.telegram.org";

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Sends text messages to a fixed set of chats.
///
/// The token is redacted in Debug output and kept out of request logs.
#[derive(Clone)]
pub struct BotNotifier {
    http: UcodeHttpClient,
    api_url: String,
    token: String,
    chat_ids: Vec<String>,
}

impl std::fmt::Debug for BotNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotNotifier")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .field("chat_ids", &self.chat_ids)
            .finish_non_exhaustive()
    }
}

impl BotNotifier {
    /// Create a notifier for the given bot token and chat ids.
    pub fn new(token: impl Into<String>, chat_ids: Vec<String>) -> Result<Self> {
        Self::with_client_config(token, chat_ids, ClientConfig::default())
    }

    /// Create a notifier from the bot settings of an SDK configuration.
    ///
    /// The configured request timeout applies to every message.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_client_config(
            config.bot_token(),
            config.notification_ids().to_vec(),
            ClientConfig::builder()
                .with_timeout(config.request_timeout())
                .build(),
        )
    }

    fn with_client_config(
        token: impl Into<String>,
        chat_ids: Vec<String>,
        client_config: ClientConfig,
    ) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::new(ErrorKind::MissingConfiguration(
                "bot token not set".to_string(),
            )));
        }
        Ok(Self {
            http: UcodeHttpClient::new(client_config)?,
            api_url: DEFAULT_BOT_API_URL.to_string(),
            token,
            chat_ids,
        })
    }

    /// Point the notifier at a different bot API host.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// The chats messages are sent to.
    pub fn chat_ids(&self) -> &[String] {
        &self.chat_ids
    }

    /// Send `text` to every configured chat, in order.
    ///
    /// Returns how many chats accepted the message. A chat that answers with
    /// a non-success status is logged and skipped; a transport failure stops
    /// the loop and is returned.
    #[instrument(skip(self, text), fields(chats = self.chat_ids.len()))]
    pub async fn send(&self, text: &str) -> Result<usize> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let mut delivered = 0;

        for chat_id in &self.chat_ids {
            let request = self
                .http
                .post(url.as_str())
                .redact_url()
                .json(&SendMessage { chat_id, text })?;

            let response = self.http.execute(request).await?;
            if response.is_success() {
                delivered += 1;
                debug!(chat_id = %chat_id, "Notification delivered");
            } else {
                warn!(
                    chat_id = %chat_id,
                    status = response.status(),
                    body = %response.text(),
                    "Notification rejected"
                );
            }
        }

        Ok(delivered)
    }
}
