//! Bot notifier built from the items client configuration.

use super::common::backend;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_notify_after_failed_operation() {
    let (server, mut client) = backend().await;

    Mock::given(method("POST"))
        .and(path("/bot42:token/sendMessage"))
        .and(body_json(json!({"chat_id": "-100", "text": "create object failed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    client.config_mut().set_bot_token("42:token");
    client.config_mut().set_notification_ids(vec!["-100".to_string()]);

    let notifier = client.notifier().unwrap().with_api_url(server.uri());
    let delivered = notifier.send("create object failed").await.unwrap();
    assert_eq!(delivered, 1);
}
