use std::sync::Once;

use ucode_sdk::{Config, ItemsClient};
use wiremock::MockServer;

pub const APP_ID: &str = "P-integration-app";

static TRACING: Once = Once::new();

/// Install a test subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Start a mock u-code backend and a client pointed at it.
pub async fn backend() -> (MockServer, ItemsClient) {
    init_tracing();
    let server = MockServer::start().await;
    let client = ItemsClient::new(Config::new(server.uri(), APP_ID).with_table_slug("houses"))
        .expect("Failed to create items client");
    (server, client)
}
