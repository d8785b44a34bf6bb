//! Call arguments and request payloads.
//!
//! Payloads are loosely typed JSON objects: the backend accepts whatever
//! fields the target table defines. Helpers cover the keys the operations
//! themselves look at (`guid`, `ids`, `objects`, `pipelines` and the
//! many-to-many fields).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ucode_sdk_client::{ErrorKind, Result};

/// A JSON object with caller-defined fields.
pub type Object = Map<String, Value>;

/// Page used when the caller passes a non-positive page.
pub const DEFAULT_PAGE: i64 = 1;

/// Limit used when the caller passes a non-positive limit.
pub const DEFAULT_LIMIT: i64 = 10;

/// Request payload, serialized as `{"data": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub data: Object,
}

impl Request {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert any serializable value into a payload.
    ///
    /// Fails with `Serialization` if the value cannot be encoded or does not
    /// encode to a JSON object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        match serde_json::to_value(value).map_err(ucode_sdk_client::Error::serialization)? {
            Value::Object(data) => Ok(Self { data }),
            other => Err(ucode_sdk_client::Error::new(ErrorKind::Serialization(
                format!("payload must be a JSON object, got {}", json_type(&other)),
            ))),
        }
    }

    /// Payload addressing a single object.
    pub fn guid(guid: impl Into<String>) -> Self {
        Self::new().with("guid", guid.into())
    }

    /// Payload listing object ids, as used by multiple delete.
    pub fn ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<Value> = ids.into_iter().map(|id| Value::String(id.into())).collect();
        Self::new().with("ids", ids)
    }

    /// Payload carrying objects for multiple update.
    pub fn objects(objects: Vec<Object>) -> Self {
        let objects: Vec<Value> = objects.into_iter().map(Value::Object).collect();
        Self::new().with("objects", objects)
    }

    /// Payload carrying aggregation pipeline stages.
    pub fn pipelines(stages: Vec<Value>) -> Self {
        Self::new().with("pipelines", stages)
    }

    /// Set a field, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(key.into(), value.into())
    }

    /// Get a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// The `guid` field rendered as a path segment.
    ///
    /// Strings are taken as-is and numbers are formatted; anything else,
    /// including an empty string, counts as absent.
    pub fn guid_value(&self) -> Option<String> {
        match self.data.get("guid")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Returns true if the payload has a `pipelines` field.
    pub fn has_pipelines(&self) -> bool {
        self.data.get("pipelines").is_some_and(|v| !v.is_null())
    }
}

impl From<Object> for Request {
    fn from(data: Object) -> Self {
        Self { data }
    }
}

impl From<ManyToMany> for Request {
    fn from(relation: ManyToMany) -> Self {
        let mut data = Object::new();
        data.insert("table_from".to_string(), relation.table_from.into());
        data.insert("table_to".to_string(), relation.table_to.into());
        data.insert("id_from".to_string(), relation.id_from.into());
        data.insert("id_to".to_string(), relation.id_to.into());
        data.extend(relation.extra);
        Self { data }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Many-to-many relation payload.
///
/// `table_from`/`id_from` name the owning row; `id_to` lists rows of
/// `table_to` to link or unlink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManyToMany {
    pub table_from: String,
    pub table_to: String,
    pub id_from: String,
    #[serde(default)]
    pub id_to: Vec<String>,
    /// Any additional fields the backend accepts.
    #[serde(flatten)]
    pub extra: Object,
}

impl ManyToMany {
    pub fn new(
        table_from: impl Into<String>,
        id_from: impl Into<String>,
        table_to: impl Into<String>,
        id_to: Vec<String>,
    ) -> Self {
        Self {
            table_from: table_from.into(),
            table_to: table_to.into(),
            id_from: id_from.into(),
            id_to,
            extra: Object::new(),
        }
    }
}

/// Arguments shared by every operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    /// Per-call application id; the configured one is used when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Target table; the configured default is used when empty.
    #[serde(default)]
    pub table_slug: String,
    #[serde(default)]
    pub request: Request,
    /// Sent as the `from-ofs` query flag.
    #[serde(default)]
    pub disable_faas: bool,
}

impl Argument {
    pub fn new(table_slug: impl Into<String>) -> Self {
        Self {
            table_slug: table_slug.into(),
            ..Self::default()
        }
    }

    pub fn with_request(mut self, request: impl Into<Request>) -> Self {
        self.request = request.into();
        self
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    pub fn with_disable_faas(mut self, disable: bool) -> Self {
        self.disable_faas = disable;
        self
    }

    /// Add pagination to these arguments.
    pub fn paginate(self, page: i64, limit: i64) -> ArgumentWithPagination {
        ArgumentWithPagination {
            argument: self,
            page,
            limit,
        }
    }
}

/// Arguments for the paginated list operations.
///
/// Non-positive values select the defaults ([`DEFAULT_PAGE`], [`DEFAULT_LIMIT`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgumentWithPagination {
    #[serde(flatten)]
    pub argument: Argument,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
}

impl ArgumentWithPagination {
    pub fn new(table_slug: impl Into<String>) -> Self {
        Argument::new(table_slug).paginate(0, 0)
    }

    pub fn page(&self) -> i64 {
        if self.page <= 0 {
            DEFAULT_PAGE
        } else {
            self.page
        }
    }

    pub fn limit(&self) -> i64 {
        if self.limit <= 0 {
            DEFAULT_LIMIT
        } else {
            self.limit
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}

impl From<Argument> for ArgumentWithPagination {
    fn from(argument: Argument) -> Self {
        argument.paginate(0, 0)
    }
}
