//! # uc-items
//!
//! u-code items API client: typed CRUD over dynamically named tables.
//!
//! ## Features
//!
//! - **Single objects** - Create, get (full and slim), update, delete
//! - **Lists** - Paginated list reads, full and slim
//! - **Aggregation** - Run aggregation pipelines against a table
//! - **Bulk** - Multiple update and multiple delete
//! - **Relations** - Append and remove many-to-many links
//!
//! Every operation returns the typed payload together with a [`Response`]
//! status wrapper; a failure returns an [`Error`] that carries the wrapper
//! with `status = "error"`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ucode_sdk_items::{Argument, Config, ItemsClient, Request};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ucode_sdk_items::Error> {
//!     let mut config = Config::default();
//!     config.set_app_id_from_env()?;
//!     let client = ItemsClient::new(config)?;
//!
//!     // Create
//!     let (created, _) = client
//!         .create_object(&Argument::new("houses").with_request(
//!             Request::new().with("name", "house").with("price", 15000).with("room_count", 5),
//!         ))
//!         .await?;
//!
//!     // List, first page of ten
//!     let (houses, _) = client.get_list(&Argument::new("houses").paginate(1, 10)).await?;
//!     for house in houses.objects() {
//!         println!("{}", house["name"]);
//!     }
//!
//!     // Delete
//!     let guid = created.object()["guid"].as_str().unwrap_or_default();
//!     client
//!         .delete(&Argument::new("houses").with_request(Request::guid(guid)))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod argument;
mod client;
mod error;
mod response;

// Main client
pub use client::ItemsClient;

// Arguments and payloads
pub use argument::{
    Argument, ArgumentWithPagination, ManyToMany, Object, Request, DEFAULT_LIMIT, DEFAULT_PAGE,
};

// Status wrapper and typed payloads
pub use response::{
    AggregationResponse, CreateResponse, Envelope, ListBody, ListResponse,
    MultipleUpdateBody, MultipleUpdateResponse, Response, SingleBody, SingleResponse, Status,
    UpdateBody, UpdateResponse,
};

pub use error::{Error, Result};

// Re-export client types callers need to configure the SDK
pub use ucode_sdk_client::{Capabilities, ClientConfig, Config, ErrorKind};
