//! List reads and aggregation.

use tracing::{debug, instrument};
use ucode_sdk_client::{ErrorKind, RequestMethod};

use super::ItemsClient;
use crate::argument::{Argument, ArgumentWithPagination};
use crate::error::{Error, Result};
use crate::response::{AggregationResponse, ListResponse, Response};

impl ItemsClient {
    /// List rows matching the payload's filters.
    ///
    /// `offset` and `limit` are written into a copy of the payload, which is
    /// sent to `POST /v2/object/get-list/{table}`.
    #[instrument(skip(self, arg), fields(table = %arg.argument.table_slug, page = arg.page, limit = arg.limit))]
    pub async fn get_list(&self, arg: &ArgumentWithPagination) -> Result<(ListResponse, Response)> {
        const OP: &str = "get list";
        let table = self.table(&arg.argument, OP)?;
        let (offset, limit) = (arg.offset(), arg.limit());
        debug!(offset, limit, "Resolved pagination");

        let mut request = arg.argument.request.clone();
        request.insert("offset", offset);
        request.insert("limit", limit);

        let raw = self
            .send(
                RequestMethod::Post,
                &format!("/v2/object/get-list/{table}"),
                &arg.argument,
                &[],
                Some(&request),
                OP,
            )
            .await?;
        Self::parse(&raw, OP)
    }

    /// List rows through the slim read path.
    ///
    /// Sends `GET /v2/object-slim/get-list/{table}` with the payload encoded
    /// as JSON in the `data` query parameter, plus `offset` and `limit`.
    #[instrument(skip(self, arg), fields(table = %arg.argument.table_slug, page = arg.page, limit = arg.limit))]
    pub async fn get_list_slim(&self, arg: &ArgumentWithPagination) -> Result<(ListResponse, Response)> {
        const OP: &str = "get list slim";
        let table = self.table(&arg.argument, OP)?;
        let filters = serde_json::to_string(&arg.argument.request.data).map_err(|e| {
            Error::new(
                format!("{OP}: error while encoding request"),
                ucode_sdk_client::Error::serialization(e),
                &[],
            )
        })?;

        let query = [
            ("data", filters),
            ("offset", arg.offset().to_string()),
            ("limit", arg.limit().to_string()),
        ];
        let raw = self
            .send(
                RequestMethod::Get,
                &format!("/v2/object-slim/get-list/{table}"),
                &arg.argument,
                &query,
                None::<&()>,
                OP,
            )
            .await?;
        Self::parse(&raw, OP)
    }

    /// Run the payload's `pipelines` against the table.
    #[instrument(skip(self, arg), fields(table = %arg.table_slug))]
    pub async fn get_list_aggregation(&self, arg: &Argument) -> Result<(AggregationResponse, Response)> {
        const OP: &str = "get list aggregation";
        self.require(self.config().capabilities().aggregation, "aggregation", OP)?;
        let table = self.table(arg, OP)?;
        if !arg.request.has_pipelines() {
            return Err(Error::rejected(
                format!("{OP}: pipelines are required"),
                ErrorKind::InvalidArgument("payload has no pipelines".to_string()),
            ));
        }

        let raw = self
            .send(
                RequestMethod::Post,
                &format!("/v2/items/{table}/aggregation"),
                arg,
                &[],
                Some(&arg.request),
                OP,
            )
            .await?;
        Self::parse(&raw, OP)
    }
}
