//! Status wrapper and typed response payloads.
//!
//! The payload types mirror the nesting the backend actually returns. Every
//! level defaults when absent or `null`, so only a shape mismatch (for
//! example a string where an object is expected) fails to parse.

use serde::{Deserialize, Deserializer, Serialize};

use crate::argument::Object;

/// Outcome of an operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Done,
    Error,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Done => f.write_str("done"),
            Status::Error => f.write_str("error"),
        }
    }
}

/// Status wrapper returned alongside every payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: Status,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub data: Object,
}

impl Response {
    /// A successful outcome.
    pub fn done() -> Self {
        Self::default()
    }

    /// A failed outcome carrying the message, raw body and error text.
    pub fn error(message: &str, description: &str, error: &dyn std::fmt::Display) -> Self {
        let error = error.to_string();
        let mut data = Object::new();
        data.insert("message".to_string(), message.into());
        data.insert("description".to_string(), description.into());
        data.insert("error".to_string(), error.clone().into());
        Self {
            status: Status::Error,
            error,
            data,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One level of `{"data": ...}` nesting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Default + Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default, deserialize_with = "nullable")]
    pub data: T,
}

/// Result of CreateObject: `data.data.data` is the created row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub data: Envelope<Envelope<Object>>,
}

impl CreateResponse {
    /// The created row.
    pub fn object(&self) -> &Object {
        &self.data.data.data
    }
}

/// Inner body of single-object reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingleBody {
    #[serde(default, deserialize_with = "nullable")]
    pub response: Object,
}

/// Result of GetSingle and GetSingleSlim: `data.data.response` is the row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingleResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub data: Envelope<SingleBody>,
}

impl SingleResponse {
    pub fn object(&self) -> &Object {
        &self.data.data.response
    }
}

/// Inner body of list reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListBody {
    #[serde(default, deserialize_with = "nullable")]
    pub response: Vec<Object>,
    /// Total matching rows, when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// Result of GetList and GetListSlim: `data.data.response` holds the rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub data: Envelope<ListBody>,
}

impl ListResponse {
    pub fn objects(&self) -> &[Object] {
        &self.data.data.response
    }

    pub fn count(&self) -> Option<u64> {
        self.data.data.count
    }
}

/// Result of GetListAggregation: `data.data.data` holds the pipeline output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub data: Envelope<Envelope<Vec<Object>>>,
}

impl AggregationResponse {
    pub fn rows(&self) -> &[Object] {
        &self.data.data.data
    }
}

/// Inner body of UpdateObject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBody {
    #[serde(default, deserialize_with = "nullable")]
    pub table_slug: String,
    #[serde(default, deserialize_with = "nullable")]
    pub data: Object,
}

/// Result of UpdateObject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub data: UpdateBody,
}

impl UpdateResponse {
    /// The updated row.
    pub fn object(&self) -> &Object {
        &self.data.data
    }
}

/// Inner body of MultipleUpdate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultipleUpdateBody {
    #[serde(default, deserialize_with = "nullable")]
    pub objects: Vec<Object>,
}

/// Result of MultipleUpdate: `data.data.objects` holds the updated rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultipleUpdateResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub data: Envelope<MultipleUpdateBody>,
}

impl MultipleUpdateResponse {
    pub fn objects(&self) -> &[Object] {
        &self.data.data.objects
    }
}
