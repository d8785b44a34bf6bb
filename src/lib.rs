//! # ucode-sdk
//!
//! A client library for the u-code low-code backend API.
//!
//! Each call is a single HTTP round-trip against a dynamically named table:
//! fixed URL template, fixed method, JSON in, JSON out. There is no caching,
//! no retry layer and no background work.
//!
//! ## Security
//!
//! - The application id and bot token are redacted in Debug output
//! - Tracing spans skip request bodies and credentials
//! - Bot API URLs (which embed the token) are kept out of logs and errors
//!
//! ## Crates
//!
//! - **ucode-sdk-client** - Core HTTP client: request executor, API-key headers, configuration, error model
//! - **ucode-sdk-items** - Items API: CRUD, slim reads, lists, aggregation, bulk, many-to-many
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ucode_sdk::{Argument, Config, ItemsClient, Request};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.set_app_id_from_env()?;
//!
//!     let client = ItemsClient::new(config)?;
//!
//!     let (houses, _) = client
//!         .get_list(&Argument::new("houses").paginate(1, 10))
//!         .await?;
//!
//!     for house in houses.objects() {
//!         println!("{}", house["name"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "client")]
pub use ucode_sdk_client as client;
#[cfg(feature = "items")]
pub use ucode_sdk_items as items;

// Re-export commonly used types at the top level
#[cfg(feature = "notify")]
pub use ucode_sdk_client::BotNotifier;
#[cfg(feature = "client")]
pub use ucode_sdk_client::{ApiClient, Capabilities, ClientConfig, Config};
#[cfg(feature = "items")]
pub use ucode_sdk_items::{Argument, ArgumentWithPagination, ItemsClient, ManyToMany, Request, Response};
