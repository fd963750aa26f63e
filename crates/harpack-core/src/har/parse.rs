//! Minimal HAR 1.2 structures for replaying captured exchanges.

use serde::Deserialize;

/// Root HAR log (top-level wrapper).
#[derive(Debug, Deserialize)]
pub struct HarLog {
    pub log: HarRoot,
}

#[derive(Debug, Deserialize)]
pub struct HarRoot {
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
    pub response: HarResponse,
    #[serde(default, rename = "startedDateTime")]
    pub started_date_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HarRequest {
    #[serde(default = "default_method")]
    pub method: String,
    pub url: String,
    #[serde(default, rename = "postData")]
    pub post_data: Option<HarPostData>,
}

fn default_method() -> String {
    "GET".to_string()
}

#[derive(Debug, Deserialize)]
pub struct HarPostData {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub params: Vec<HarParam>,
}

#[derive(Debug, Deserialize)]
pub struct HarParam {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct HarResponse {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub content: HarContent,
}

/// Response body as recorded in the HAR. `size` can be -1 for unknown;
/// `text` is absent when the recorder skipped the body.
#[derive(Debug, Default, Deserialize)]
pub struct HarContent {
    #[serde(default, rename = "mimeType")]
    pub mime_type: String,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}
