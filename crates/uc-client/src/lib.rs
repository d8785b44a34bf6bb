//! # uc-client
//!
//! Core HTTP client infrastructure for the u-code API.
//!
//! This crate provides the foundational pieces every u-code API surface
//! builds on:
//! - A request executor that returns raw response bytes regardless of status
//! - API-key authentication headers (`authorization` + `X-API-KEY`)
//! - Per-request timeouts
//! - Request/response tracing
//! - A single error model shared by all higher-level crates
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (uc-items)                                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       ApiClient                             │
//! │  - Holds base URL, default app id + HTTP client             │
//! │  - Stamps the API-key headers on every request              │
//! │  - do_request(): send any JSON body to any URL              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    UcodeHttpClient                          │
//! │  - Raw HTTP execution, timeouts, compression                │
//! │  - Request building                                         │
//! │  - Response body capture                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use ucode_sdk_client::{ApiClient, Config, RequestMethod};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ucode_sdk_client::Error> {
//!     let client = ApiClient::new(Config::new("https://api.admin.u-code.io", "P-my-app-id"))?;
//!
//!     let body = client
//!         .do_request(
//!             &client.url("/v2/items/houses"),
//!             RequestMethod::Post,
//!             Some(&serde_json::json!({"data": {"name": "house"}})),
//!             &[],
//!         )
//!         .await?;
//!
//!     println!("{}", String::from_utf8_lossy(&body));
//!     Ok(())
//! }
//! ```

mod api_client;
mod client;
mod config;
mod error;
#[cfg(feature = "notify")]
mod notify;
mod request;
mod response;

pub use api_client::{path_segment, ApiClient};
pub use client::UcodeHttpClient;
pub use config::{Capabilities, ClientConfig, ClientConfigBuilder, Config, APP_ID_ENV};
pub use error::{Error, ErrorKind, Result};
#[cfg(feature = "notify")]
pub use notify::{BotNotifier, DEFAULT_BOT_API_URL};
pub use request::{RequestBuilder, RequestMethod};
pub use response::RawResponse;

/// Default u-code API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.admin.u-code.io";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("ucode-sdk/", env!("CARGO_PKG_VERSION"));

/// Value of the `authorization` header sent with every request.
pub const AUTHORIZATION_SCHEME: &str = "API-KEY";

/// Header carrying the application id.
pub const API_KEY_HEADER: &str = "X-API-KEY";
