//! Exchange collection: classify, await the body, shape one record.
//!
//! Exactly one record comes out of every finished exchange — a resource
//! or an API call, never both. The body future is the only suspension
//! point; a failed retrieval drops the exchange entirely (no record, no
//! retry). Parsing failures never propagate: bodies fall back to raw
//! text, malformed URLs classify as "other".

use std::future::Future;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::classify::{self, Classification};
use crate::store::{ApiBody, CapturedApiCall, CapturedResource, StoreRequest, StoreSink};

/// Metadata of one finished exchange, as reported by the host.
#[derive(Debug, Clone)]
pub struct ObservedExchange {
    pub url: String,
    pub method: String,
    pub status: u16,
    /// Declared response MIME type; empty when the host omits it.
    pub mime_type: String,
    /// Declared response size; `None` when the host does not report one.
    pub size: Option<u64>,
    /// Raw request post data, if any.
    pub post_data: Option<PostData>,
    /// Capture instant reported by the host (HAR replay); records fall
    /// back to the time of observation when absent.
    pub started_at: Option<DateTime<Utc>>,
}

/// Raw request body as the host reports it.
#[derive(Debug, Clone, Default)]
pub struct PostData {
    pub text: Option<String>,
    pub params: Vec<FormParam>,
}

/// One structured form parameter.
#[derive(Debug, Clone, Serialize)]
pub struct FormParam {
    pub name: String,
    pub value: String,
}

/// Response body as delivered by the host's asynchronous fetch.
#[derive(Debug, Clone, Default)]
pub struct BodyContent {
    pub content: String,
    /// Transfer-encoding hint ("base64" for binary bodies).
    pub encoding: Option<String>,
}

/// Collects finished exchanges into a store sink.
pub struct Collector<S> {
    sink: S,
}

impl<S: StoreSink> Collector<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Observes one finished exchange: awaits `body`, shapes the record,
    /// submits it. Returns true when the store acknowledged the record.
    pub async fn observe<F>(&self, exchange: ObservedExchange, body: F) -> bool
    where
        F: Future<Output = Result<BodyContent>>,
    {
        let body = match body.await {
            Ok(body) => body,
            Err(err) => {
                tracing::debug!(url = %exchange.url, "body retrieval failed, exchange dropped: {err:#}");
                return false;
            }
        };

        let timestamp = exchange.started_at.unwrap_or_else(Utc::now);
        let request = shape_record(&exchange, body, timestamp);
        match self.sink.submit(request).await {
            Ok(success) => success,
            Err(err) => {
                tracing::warn!(url = %exchange.url, "store submission failed: {err:#}");
                false
            }
        }
    }
}

/// Shapes the single record for an exchange: API call or resource,
/// decided by classification.
pub fn shape_record(
    exchange: &ObservedExchange,
    body: BodyContent,
    timestamp: DateTime<Utc>,
) -> StoreRequest {
    let Classification {
        resource_type,
        is_api_call,
    } = classify::classify(&exchange.url, &exchange.mime_type);

    if is_api_call {
        StoreRequest::AddApiCall(Box::new(CapturedApiCall {
            url: exchange.url.clone(),
            method: exchange.method.clone(),
            request_body: parse_request_body(exchange.post_data.as_ref()),
            response_body: parse_response_body(&body.content, &exchange.mime_type),
            status: exchange.status,
            timestamp,
        }))
    } else {
        StoreRequest::AddResource(Box::new(CapturedResource {
            url: exchange.url.clone(),
            kind: resource_type,
            mime_type: exchange.mime_type.clone(),
            content: body.content,
            encoding: body.encoding,
            size: exchange.size.unwrap_or(0),
            timestamp,
        }))
    }
}

/// Request body: JSON if the text parses, else form params if present,
/// else nothing; unparseable text is kept raw.
fn parse_request_body(post_data: Option<&PostData>) -> Option<ApiBody> {
    let post_data = post_data?;
    if let Some(text) = post_data.text.as_deref().filter(|t| !t.is_empty()) {
        return Some(match serde_json::from_str::<Value>(text) {
            Ok(value) => ApiBody::Json(value),
            Err(_) => ApiBody::Text(text.to_string()),
        });
    }
    if post_data.params.is_empty() {
        return None;
    }
    serde_json::to_value(&post_data.params).ok().map(ApiBody::Json)
}

/// MIME families whose response bodies are replaced with the binary
/// sentinel instead of being stored.
const FILE_LIKE_MIME_FRAGMENTS: &[&str] = &["octet-stream", "image", "video", "audio"];

/// Response body: JSON when the MIME says JSON (raw text on parse
/// failure), the binary sentinel for file-like MIME families, raw text
/// otherwise. Empty bodies record as absent.
fn parse_response_body(content: &str, mime_type: &str) -> Option<ApiBody> {
    if content.is_empty() {
        return None;
    }
    if mime_type.contains("json") {
        return Some(match serde_json::from_str::<Value>(content) {
            Ok(value) => ApiBody::Json(value),
            Err(_) => ApiBody::Text(content.to_string()),
        });
    }
    if FILE_LIKE_MIME_FRAGMENTS
        .iter()
        .any(|fragment| mime_type.contains(fragment))
    {
        return Some(ApiBody::Binary);
    }
    Some(ApiBody::Text(content.to_string()))
}
