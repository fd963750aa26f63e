//! HAR entry → observed exchange plus embedded body.

use chrono::{DateTime, Utc};

use crate::collector::{BodyContent, FormParam, ObservedExchange, PostData};

use super::parse::HarEntry;

/// Converts one HAR entry into the collector's observation inputs. The
/// embedded response body stands in for the host's asynchronous fetch;
/// entries recorded without a body replay as empty content.
pub fn exchange_from_entry(entry: &HarEntry) -> (ObservedExchange, BodyContent) {
    let content = &entry.response.content;

    let exchange = ObservedExchange {
        url: entry.request.url.clone(),
        method: entry.request.method.clone(),
        status: entry.response.status,
        mime_type: content.mime_type.clone(),
        size: content.size.and_then(|s| u64::try_from(s).ok()),
        post_data: entry.request.post_data.as_ref().map(|post| PostData {
            text: post.text.clone(),
            params: post
                .params
                .iter()
                .map(|p| FormParam {
                    name: p.name.clone(),
                    value: p.value.clone(),
                })
                .collect(),
        }),
        started_at: entry
            .started_date_time
            .as_deref()
            .and_then(parse_instant),
    };

    let body = BodyContent {
        content: content.text.clone().unwrap_or_default(),
        encoding: content.encoding.clone(),
    };

    (exchange, body)
}

/// HAR `startedDateTime` is RFC 3339 with an offset; anything else is
/// treated as unrecorded.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: &str) -> HarEntry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn converts_metadata_and_body() {
        let entry = entry(
            r#"{
                "startedDateTime": "2026-08-07T10:00:00.000Z",
                "request": { "method": "GET", "url": "https://x.com/app.js" },
                "response": {
                    "status": 200,
                    "content": {
                        "mimeType": "application/javascript",
                        "size": 14,
                        "text": "console.log(1)"
                    }
                }
            }"#,
        );
        let (exchange, body) = exchange_from_entry(&entry);
        assert_eq!(exchange.url, "https://x.com/app.js");
        assert_eq!(exchange.size, Some(14));
        assert_eq!(
            exchange.started_at,
            Some("2026-08-07T10:00:00Z".parse().unwrap())
        );
        assert_eq!(body.content, "console.log(1)");
        assert_eq!(body.encoding, None);
    }

    #[test]
    fn unknown_size_and_missing_body() {
        let entry = entry(
            r#"{
                "request": { "url": "https://x.com/a" },
                "response": { "status": 200, "content": { "size": -1 } }
            }"#,
        );
        let (exchange, body) = exchange_from_entry(&entry);
        assert_eq!(exchange.method, "GET");
        assert_eq!(exchange.size, None);
        assert_eq!(exchange.started_at, None);
        assert_eq!(body.content, "");
    }

    #[test]
    fn post_data_carries_over() {
        let entry = entry(
            r#"{
                "request": {
                    "method": "POST",
                    "url": "https://x.com/api/v1/search",
                    "postData": {
                        "params": [ { "name": "q", "value": "rust" } ]
                    }
                },
                "response": { "status": 200, "content": {} }
            }"#,
        );
        let (exchange, _) = exchange_from_entry(&entry);
        let post = exchange.post_data.unwrap();
        assert_eq!(post.text, None);
        assert_eq!(post.params.len(), 1);
        assert_eq!(post.params[0].name, "q");
    }
}
