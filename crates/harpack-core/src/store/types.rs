//! Captured records shared by the collector, store, and exporter.
//!
//! Serialized field names use devtools-style camelCase (`mimeType`,
//! `requestBody`, ...) so records on the wire read naturally next to the
//! HAR captures they came from.

use chrono::{DateTime, Utc};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel stored in place of file-like API response bodies.
pub const BINARY_BODY_SENTINEL: &str = "[FILE]";

/// A non-API network response. At most one is stored per URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedResource {
    pub url: String,
    /// Resource-type tag from classification ("js", "png", "other", ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub mime_type: String,
    /// Body text, or base64 text when `encoding` says so.
    pub content: String,
    /// Transfer-encoding hint for `content` ("base64" for binary bodies).
    #[serde(default)]
    pub encoding: Option<String>,
    /// Declared size in bytes; 0 when unknown.
    #[serde(default)]
    pub size: u64,
    pub timestamp: DateTime<Utc>,
}

/// A network exchange classified as an API interaction. Never deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedApiCall {
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub request_body: Option<ApiBody>,
    #[serde(default)]
    pub response_body: Option<ApiBody>,
    pub status: u16,
    pub timestamp: DateTime<Utc>,
}

/// An API request or response body after collector parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    /// Parsed JSON (also covers form params converted to a JSON array).
    Json(Value),
    /// Unparseable body kept as raw text.
    Text(String),
    /// File-like response whose bytes were intentionally dropped.
    Binary,
}

// On the wire the binary case is the sentinel string; any other string
// is raw text and anything else is parsed JSON.

impl Serialize for ApiBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ApiBody::Json(value) => value.serialize(serializer),
            ApiBody::Text(text) => serializer.serialize_str(text),
            ApiBody::Binary => serializer.serialize_str(BINARY_BODY_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for ApiBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) if s == BINARY_BODY_SENTINEL => ApiBody::Binary,
            Value::String(s) => ApiBody::Text(s),
            other => ApiBody::Json(other),
        })
    }
}
