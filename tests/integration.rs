//! Integration test suite, run against local mock servers.
//!
//! Run all integration tests with:
//!   RUST_LOG=ucode_sdk=debug cargo test --test integration -- --nocapture

#[path = "integration/common.rs"]
mod common;
#[path = "integration/config.rs"]
mod config;
#[path = "integration/items.rs"]
mod items;
#[path = "integration/notify.rs"]
mod notify;
