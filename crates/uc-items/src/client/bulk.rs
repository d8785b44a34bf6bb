//! Bulk update and delete.

use tracing::instrument;
use ucode_sdk_client::RequestMethod;

use super::ItemsClient;
use crate::argument::Argument;
use crate::error::Result;
use crate::response::{MultipleUpdateResponse, Response};

impl ItemsClient {
    /// Update several rows at once; the payload carries `objects`.
    #[instrument(skip(self, arg), fields(table = %arg.table_slug))]
    pub async fn multiple_update(&self, arg: &Argument) -> Result<(MultipleUpdateResponse, Response)> {
        const OP: &str = "multiple update";
        let table = self.table(arg, OP)?;
        let raw = self
            .send(
                RequestMethod::Put,
                &format!("/v1/object/multiple-update/{table}"),
                arg,
                &[],
                Some(&arg.request),
                OP,
            )
            .await?;
        Self::parse(&raw, OP)
    }

    /// Delete the rows listed in the payload's `ids`.
    ///
    /// The payload map is sent as the body without the `data` wrapper. The
    /// response body is not inspected.
    #[instrument(skip(self, arg), fields(table = %arg.table_slug))]
    pub async fn multiple_delete(&self, arg: &Argument) -> Result<Response> {
        const OP: &str = "multiple delete";
        let table = self.table(arg, OP)?;
        self.send(
            RequestMethod::Delete,
            &format!("/v1/object/{table}"),
            arg,
            &[],
            Some(&arg.request.data),
            OP,
        )
        .await?;
        Ok(Response::done())
    }
}
