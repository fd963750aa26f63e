//! Exchange classification: resource-type tag and API-call detection.
//!
//! A URL extension from the known list beats MIME inference; otherwise
//! the ordered MIME-fragment table decides (first match wins); otherwise
//! the URL extension, if any, and finally `"other"`. API detection is a
//! deliberately permissive heuristic: a JSON MIME counts as an API call
//! unless the URL is a plain `.json` file outside API-looking paths.

mod ext;
mod table;

pub use ext::extension_from_url;

/// Tag used when nothing else matches.
pub const OTHER_TYPE: &str = "other";

/// Result of classifying one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub resource_type: String,
    pub is_api_call: bool,
}

/// Classifies one exchange from its URL and declared MIME type.
///
/// Deterministic, and total: malformed URLs and absent MIME types fall
/// through to safe defaults rather than erroring.
pub fn classify(url: &str, mime_type: &str) -> Classification {
    Classification {
        resource_type: resource_type_for(url, mime_type),
        is_api_call: is_api_call(url, mime_type),
    }
}

fn resource_type_for(url: &str, mime_type: &str) -> String {
    let url_ext = extension_from_url(url);
    if let Some(ext) = url_ext.as_deref() {
        if table::is_known_extension(ext) {
            // Single alias: jpeg and jpg collapse into one tag.
            let tag = if ext == "jpeg" { "jpg" } else { ext };
            return tag.to_string();
        }
    }

    let mime = mime_type.to_ascii_lowercase();
    if let Some(tag) = table::tag_for_mime(&mime) {
        return tag.to_string();
    }

    url_ext.unwrap_or_else(|| OTHER_TYPE.to_string())
}

/// True iff the MIME type says JSON and the URL either carries an
/// API-looking path marker or is not a plain `.json` file. The catch-all
/// branch (JSON from any non-`.json` URL) is intentional.
fn is_api_call(url: &str, mime_type: &str) -> bool {
    let mime = mime_type.to_ascii_lowercase();
    if !mime.contains("json") {
        return false;
    }
    url.contains("/api/")
        || url.contains("/v1/")
        || url.contains("/v2/")
        || !url.to_ascii_lowercase().ends_with(".json")
}
