//! Single-object operations.

use tracing::instrument;
use ucode_sdk_client::RequestMethod;

use super::ItemsClient;
use crate::argument::{Argument, Request};
use crate::error::Result;
use crate::response::{CreateResponse, Response, SingleResponse, UpdateResponse};

impl ItemsClient {
    /// Create a row in the argument's table.
    ///
    /// Sends `POST /v2/items/{table}` with the payload as `{"data": {...}}`.
    #[instrument(skip(self, arg), fields(table = %arg.table_slug))]
    pub async fn create_object(&self, arg: &Argument) -> Result<(CreateResponse, Response)> {
        const OP: &str = "create object";
        let table = self.table(arg, OP)?;
        let raw = self
            .send(
                RequestMethod::Post,
                &format!("/v2/items/{table}"),
                arg,
                &[],
                Some(&arg.request),
                OP,
            )
            .await?;
        Self::parse(&raw, OP)
    }

    /// Fetch one row by the payload's `guid`.
    #[instrument(skip(self, arg), fields(table = %arg.table_slug))]
    pub async fn get_single(&self, arg: &Argument) -> Result<(SingleResponse, Response)> {
        const OP: &str = "get single";
        let table = self.table(arg, OP)?;
        let guid = Self::guid(arg, OP)?;
        let raw = self
            .send(
                RequestMethod::Get,
                &format!("/v2/items/{table}/{guid}"),
                arg,
                &[],
                None::<&()>,
                OP,
            )
            .await?;
        Self::parse(&raw, OP)
    }

    /// Fetch one row by `guid` through the slim read path.
    #[instrument(skip(self, arg), fields(table = %arg.table_slug))]
    pub async fn get_single_slim(&self, arg: &Argument) -> Result<(SingleResponse, Response)> {
        const OP: &str = "get single slim";
        let table = self.table(arg, OP)?;
        let guid = Self::guid(arg, OP)?;
        let raw = self
            .send(
                RequestMethod::Get,
                &format!("/v1/object-slim/{table}/{guid}"),
                arg,
                &[],
                None::<&()>,
                OP,
            )
            .await?;
        Self::parse(&raw, OP)
    }

    /// Update a row; the payload carries the `guid` and the changed fields.
    #[instrument(skip(self, arg), fields(table = %arg.table_slug))]
    pub async fn update_object(&self, arg: &Argument) -> Result<(UpdateResponse, Response)> {
        const OP: &str = "update object";
        let table = self.table(arg, OP)?;
        let raw = self
            .send(
                RequestMethod::Put,
                &format!("/v2/items/{table}"),
                arg,
                &[],
                Some(&arg.request),
                OP,
            )
            .await?;
        Self::parse(&raw, OP)
    }

    /// Delete the row named by the payload's `guid`.
    ///
    /// The response body is not inspected.
    #[instrument(skip(self, arg), fields(table = %arg.table_slug))]
    pub async fn delete(&self, arg: &Argument) -> Result<Response> {
        const OP: &str = "delete";
        let table = self.table(arg, OP)?;
        let guid = Self::guid(arg, OP)?;
        self.send(
            RequestMethod::Delete,
            &format!("/v2/items/{table}/{guid}"),
            arg,
            &[],
            Some(&Request::new()),
            OP,
        )
        .await?;
        Ok(Response::done())
    }
}
