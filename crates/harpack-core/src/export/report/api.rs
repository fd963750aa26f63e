//! `api-requests.md`: every captured API exchange, oldest first.

use chrono::{DateTime, Local};

use crate::store::{ApiBody, CapturedApiCall};

use super::{format_generated, format_local};

/// Marker rendered for file-like responses whose bytes were dropped at
/// capture time.
const BINARY_OMITTED_MARKER: &str = "[binary content omitted]";
const EMPTY_BODY_PLACEHOLDER: &str = "(none)";

/// Renders the API request log. Entries are sorted by ascending capture
/// instant; bodies render as pretty JSON when structured, raw text when
/// not, and fixed placeholders for absent or binary-omitted bodies.
pub fn api_requests_log(api_calls: &[CapturedApiCall], generated_at: DateTime<Local>) -> String {
    let mut lines: Vec<String> = vec![
        "# API Request Log".to_string(),
        String::new(),
        format!("> Generated: {}", format_generated(generated_at)),
        format!("> Total requests: {}", api_calls.len()),
        String::new(),
    ];

    let mut sorted: Vec<&CapturedApiCall> = api_calls.iter().collect();
    sorted.sort_by_key(|call| call.timestamp);

    for (index, call) in sorted.iter().enumerate() {
        lines.push(format!("## {}. {} {}", index + 1, call.method, call.url));
        lines.push(String::new());
        lines.push(format!("- **Time**: {}", format_local(call.timestamp)));
        lines.push(format!("- **Status**: {}", call.status));
        lines.push(String::new());
        lines.push("### Request Parameters".to_string());
        lines.push("```json".to_string());
        lines.push(render_body(call.request_body.as_ref()));
        lines.push("```".to_string());
        lines.push(String::new());
        lines.push("### Response".to_string());
        lines.push("```json".to_string());
        lines.push(render_body(call.response_body.as_ref()));
        lines.push("```".to_string());
        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}

fn render_body(body: Option<&ApiBody>) -> String {
    match body {
        None => EMPTY_BODY_PLACEHOLDER.to_string(),
        Some(ApiBody::Json(value)) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        Some(ApiBody::Text(text)) => text.clone(),
        Some(ApiBody::Binary) => BINARY_OMITTED_MARKER.to_string(),
    }
}
