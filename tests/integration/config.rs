//! Configuration loading.

use std::io::Write;

use ucode_sdk::items::ErrorKind;
use ucode_sdk::{Config, ItemsClient};

#[test]
fn test_app_id_from_env_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "APP_ID=P-from-dotenv").unwrap();

    let mut config = Config::default();
    config.set_app_id_from_env_file(file.path()).unwrap();
    assert_eq!(config.app_id(), "P-from-dotenv");

    let client = ItemsClient::new(config).unwrap();
    assert_eq!(client.config().app_id(), "P-from-dotenv");
}

#[test]
fn test_missing_env_file() {
    let mut config = Config::default();
    let err = config
        .set_app_id_from_env_file("/nonexistent/ucode/.env")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingConfiguration(_)));
}

#[test]
fn test_debug_redacts_credentials() {
    let config = Config::new("https://api.admin.u-code.io", "P-secret-app").with_bot_token("123:secret");
    let client = ItemsClient::new(config).unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("P-secret-app"));
    assert!(!debug.contains("123:secret"));
}
