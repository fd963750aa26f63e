//! Generated markdown reports for the export archive.

mod api;
mod resources;

pub use api::api_requests_log;
pub use resources::resources_log;

use chrono::{DateTime, Local, Utc};

/// Renders a byte count: `-` for unknown (zero), whole bytes below
/// 1 KB, otherwise one decimal.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "-".to_string();
    }
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    if bytes < 1024 * 1024 {
        return format!("{:.1} KB", bytes as f64 / 1024.0);
    }
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Capture instants render in local time in both reports.
pub(crate) fn format_local(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

pub(crate) fn format_generated(generated_at: DateTime<Local>) -> String {
    generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
}
