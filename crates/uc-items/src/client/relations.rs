//! Many-to-many relations.

use tracing::instrument;
use ucode_sdk_client::RequestMethod;

use super::ItemsClient;
use crate::argument::Argument;
use crate::error::Result;
use crate::response::Response;

const MANY_TO_MANY_PATH: &str = "/v2/items/many-to-many";

impl ItemsClient {
    /// Link rows of `table_to` to a row of `table_from`.
    ///
    /// The payload map (see [`ManyToMany`](crate::ManyToMany)) is sent as
    /// the body without the `data` wrapper.
    #[instrument(skip(self, arg))]
    pub async fn append_many_to_many(&self, arg: &Argument) -> Result<Response> {
        self.many_to_many(RequestMethod::Put, arg, "append many-to-many").await
    }

    /// Unlink rows of `table_to` from a row of `table_from`.
    #[instrument(skip(self, arg))]
    pub async fn delete_many_to_many(&self, arg: &Argument) -> Result<Response> {
        self.many_to_many(RequestMethod::Delete, arg, "delete many-to-many").await
    }

    async fn many_to_many(&self, method: RequestMethod, arg: &Argument, operation: &str) -> Result<Response> {
        self.require(self.config().capabilities().many_to_many, "many-to-many", operation)?;
        self.send(method, MANY_TO_MANY_PATH, arg, &[], Some(&arg.request.data), operation)
            .await?;
        Ok(Response::done())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::argument::{ManyToMany, Request};
    use crate::{Argument, ItemsClient};
    use serde_json::json;
    use ucode_sdk_client::{Capabilities, Config, ErrorKind};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn relation() -> Argument {
        Argument::default().with_request(ManyToMany::new(
            "houses",
            "h1",
            "owners",
            vec!["o1".to_string()],
        ))
    }

    fn relation_body() -> serde_json::Value {
        json!({"table_from": "houses", "table_to": "owners", "id_from": "h1", "id_to": ["o1"]})
    }

    #[tokio::test]
    async fn test_append_many_to_many() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v2/items/many-to-many"))
            .and(query_param("from-ofs", "false"))
            .and(body_json(relation_body()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        assert!(client.append_many_to_many(&relation()).await.unwrap().is_done());
    }

    #[tokio::test]
    async fn test_delete_many_to_many() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v2/items/many-to-many"))
            .and(body_json(relation_body()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        assert!(client.delete_many_to_many(&relation()).await.unwrap().is_done());
    }

    #[tokio::test]
    async fn test_raw_payload_passes_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v2/items/many-to-many"))
            .and(body_json(json!({"table_from": "houses", "custom": 1})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        client
            .append_many_to_many(
                &Argument::default()
                    .with_request(Request::new().with("table_from", "houses").with("custom", 1)),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_disabled_many_to_many_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = ItemsClient::new(
            Config::new(mock_server.uri(), APP_ID).with_capabilities(Capabilities::crud_only()),
        )
        .unwrap();
        let err = client.append_many_to_many(&relation()).await.unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::Unsupported(_)));
        assert_eq!(err.response.data["message"], "append many-to-many: many-to-many is disabled");
    }
}
