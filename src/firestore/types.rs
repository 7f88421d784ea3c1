use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single Firestore value in REST wire format, e.g. `{"stringValue": "John"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    StringValue(String),
    IntegerValue(String),
    DoubleValue(f64),
    BooleanValue(bool),
    TimestampValue(String),
    NullValue(()),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::StringValue(s.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::StringValue(s) => Some(s),
            _ => None,
        }
    }

    /// Converts the wire value to plain JSON. Firestore encodes 64-bit
    /// integers as strings; fall back to the raw string when out of range.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::StringValue(s) => serde_json::Value::String(s.clone()),
            Value::IntegerValue(s) => s
                .parse::<i64>()
                .map(|n| serde_json::json!(n))
                .unwrap_or_else(|_| serde_json::Value::String(s.clone())),
            Value::DoubleValue(d) => serde_json::json!(d),
            Value::BooleanValue(b) => serde_json::Value::Bool(*b),
            Value::TimestampValue(s) => serde_json::Value::String(s.clone()),
            Value::NullValue(()) => serde_json::Value::Null,
            Value::ArrayValue(arr) => {
                serde_json::Value::Array(arr.values.iter().map(Value::to_json).collect())
            }
            Value::MapValue(map) => serde_json::Value::Object(
                map.fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

/// A Firestore document as returned by the REST API. `name` is the full
/// resource path, `projects/{p}/databases/(default)/documents/{path}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

impl Document {
    /// Document id, the last segment of the resource name. Ids are the
    /// semantic keys here (date strings, registration numbers).
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    pub fn string_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// `{id, ...fields}` shape used by the users listing.
    pub fn to_json_with_id(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        obj.insert("id".to_string(), serde_json::json!(self.id()));
        for (key, value) in &self.fields {
            obj.insert(key.clone(), value.to_json());
        }
        serde_json::Value::Object(obj)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    pub next_page_token: Option<String>,
}
