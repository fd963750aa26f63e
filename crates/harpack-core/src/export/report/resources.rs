//! `resources-log.md`: overview table plus per-type detail sections.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use crate::classify::OTHER_TYPE;
use crate::store::CapturedResource;

use super::super::filename::filename_from_url;
use super::{format_generated, format_local, format_size};

/// Renders the resource log for the exported (already filtered) items.
/// The overview table is sorted by type name; each detail section lists
/// its items oldest first.
pub fn resources_log(resources: &[&CapturedResource], generated_at: DateTime<Local>) -> String {
    let mut lines: Vec<String> = vec![
        "# Resource Capture Log".to_string(),
        String::new(),
        format!("**Generated**: {}", format_generated(generated_at)),
        String::new(),
        format!("**Total resources**: {}", resources.len()),
        String::new(),
    ];

    let mut grouped: BTreeMap<&str, Vec<&CapturedResource>> = BTreeMap::new();
    for &resource in resources {
        let kind = if resource.kind.is_empty() {
            OTHER_TYPE
        } else {
            resource.kind.as_str()
        };
        grouped.entry(kind).or_default().push(resource);
    }

    lines.push("## Overview".to_string());
    lines.push(String::new());
    lines.push("| Type | Count | Total Size |".to_string());
    lines.push("|------|-------|------------|".to_string());
    for (kind, items) in &grouped {
        let total: u64 = items.iter().map(|r| r.size).sum();
        lines.push(format!(
            "| {} | {} | {} |",
            kind,
            items.len(),
            format_size(total)
        ));
    }
    lines.push(String::new());

    lines.push("## Details".to_string());
    lines.push(String::new());
    for (kind, items) in &grouped {
        let mut items = items.clone();
        items.sort_by_key(|r| r.timestamp);

        lines.push(format!("### {} ({})", kind.to_uppercase(), items.len()));
        lines.push(String::new());
        for (index, item) in items.iter().enumerate() {
            let filename = filename_from_url(&item.url, index);
            lines.push(format!("{}. **{}**", index + 1, filename));
            lines.push(format!("   - Size: {}", format_size(item.size)));
            lines.push(format!("   - Time: {}", format_local(item.timestamp)));
            lines.push(format!("   - URL: `{}`", item.url));
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
