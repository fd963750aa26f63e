//! Batch export: filter, group, name, decode, report, archive.
//!
//! Takes a store snapshot and a type selection and produces a single zip
//! artifact: one entry per resource at `resources/<type>/<filename>`,
//! a resource log, and (whenever any API calls were captured, regardless
//! of the resource selection) an API request log. An empty result set is
//! a guarded precondition, not an error; assembly failures surface as
//! [`ExportError`] and no partial file is emitted.

mod archive;
mod content;
mod filename;
mod report;

pub use archive::{build_archive, ArchiveEntry};
pub use content::{decode_content, is_binary_mime};
pub use filename::{filename_from_url, NameAllocator};
pub use report::{api_requests_log, format_size, resources_log};

use std::collections::BTreeSet;

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::store::{CapturedApiCall, CapturedResource};

/// Errors surfaced to the user at export time.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("archive assembly failed: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("archive write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of an export request.
#[derive(Debug)]
pub enum ExportOutcome {
    /// Completed archive plus its suggested file name.
    Archive(ExportArchive),
    /// The selection matched nothing and no API calls were captured.
    NothingSelected,
}

#[derive(Debug)]
pub struct ExportArchive {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Resolves the effective type selection: an empty request selects
/// every observed type.
pub fn resolve_selection(
    requested: &[String],
    resources: &[CapturedResource],
) -> BTreeSet<String> {
    let requested: BTreeSet<String> = requested
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();
    if !requested.is_empty() {
        return requested;
    }
    resources.iter().map(|r| r.kind.clone()).collect()
}

/// Exports the selected resource types (plus any API calls) as a zip.
pub fn export(
    resources: &[CapturedResource],
    api_calls: &[CapturedApiCall],
    selected_types: &BTreeSet<String>,
    archive_prefix: &str,
    generated_at: DateTime<Local>,
) -> Result<ExportOutcome, ExportError> {
    let filtered: Vec<&CapturedResource> = resources
        .iter()
        .filter(|r| selected_types.contains(&r.kind))
        .collect();

    if filtered.is_empty() && api_calls.is_empty() {
        return Ok(ExportOutcome::NothingSelected);
    }

    let entries = plan_entries(&filtered);
    let resources_report = (!filtered.is_empty()).then(|| resources_log(&filtered, generated_at));
    let api_report = (!api_calls.is_empty()).then(|| api_requests_log(api_calls, generated_at));

    let bytes = build_archive(
        &entries,
        resources_report.as_deref(),
        api_report.as_deref(),
    )?;

    Ok(ExportOutcome::Archive(ExportArchive {
        file_name: format!("{archive_prefix}_{}.zip", generated_at.format("%Y%m%d_%H%M")),
        bytes,
    }))
}

/// Groups the filtered items by type (first-seen order) and plans one
/// archive entry per item, names resolved per group.
fn plan_entries(filtered: &[&CapturedResource]) -> Vec<ArchiveEntry> {
    let mut entries = Vec::with_capacity(filtered.len());
    for (kind, items) in group_by_type(filtered) {
        let mut names = NameAllocator::new();
        for (index, item) in items.iter().enumerate() {
            let derived = filename_from_url(&item.url, index);
            let name = names.allocate(derived, index);
            entries.push(ArchiveEntry {
                path: format!("resources/{kind}/{name}"),
                data: decode_content(&item.content, &item.mime_type),
            });
        }
    }
    entries
}

fn group_by_type<'a>(
    filtered: &[&'a CapturedResource],
) -> Vec<(String, Vec<&'a CapturedResource>)> {
    let mut groups: Vec<(String, Vec<&CapturedResource>)> = Vec::new();
    for &item in filtered {
        let kind = if item.kind.is_empty() {
            crate::classify::OTHER_TYPE
        } else {
            item.kind.as_str()
        };
        match groups.iter_mut().find(|(k, _)| k == kind) {
            Some((_, items)) => items.push(item),
            None => groups.push((kind.to_string(), vec![item])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn resource(url: &str, kind: &str, mime: &str, content: &str) -> CapturedResource {
        CapturedResource {
            url: url.into(),
            kind: kind.into(),
            mime_type: mime.into(),
            content: content.into(),
            encoding: None,
            size: content.len() as u64,
            timestamp: "2026-08-07T10:00:00Z".parse().unwrap(),
        }
    }

    fn api_call(url: &str) -> CapturedApiCall {
        CapturedApiCall {
            url: url.into(),
            method: "GET".into(),
            request_body: None,
            response_body: None,
            status: 200,
            timestamp: "2026-08-07T10:00:00Z".parse().unwrap(),
        }
    }

    fn generated() -> DateTime<Local> {
        "2026-08-07T12:34:00Z"
            .parse::<DateTime<Utc>>()
            .unwrap()
            .with_timezone(&Local)
    }

    fn selection(types: &[&str]) -> BTreeSet<String> {
        types.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn empty_selection_and_no_api_calls_is_nothing_selected() {
        let resources = [resource("https://x.com/a.js", "js", "text/javascript", "x")];
        let outcome = export(&resources, &[], &selection(&["css"]), "resources", generated()).unwrap();
        assert!(matches!(outcome, ExportOutcome::NothingSelected));
    }

    #[test]
    fn api_calls_alone_still_produce_an_archive() {
        let outcome = export(
            &[],
            &[api_call("https://x.com/api/v1/u")],
            &selection(&[]),
            "resources",
            generated(),
        )
        .unwrap();
        let archive = match outcome {
            ExportOutcome::Archive(a) => a,
            other => panic!("expected archive, got {other:?}"),
        };
        let mut zip = ZipArchive::new(Cursor::new(archive.bytes)).unwrap();
        assert_eq!(zip.len(), 1);
        assert!(zip.by_name("api-requests.md").is_ok());
    }

    #[test]
    fn selection_filters_entries_but_not_api_report() {
        let resources = [
            resource("https://x.com/a.js", "js", "text/javascript", "js code"),
            resource("https://x.com/a.css", "css", "text/css", "body{}"),
        ];
        let api_calls = [api_call("https://x.com/api/v1/u")];
        let outcome = export(&resources, &api_calls, &selection(&["js"]), "resources", generated())
            .unwrap();
        let archive = match outcome {
            ExportOutcome::Archive(a) => a,
            other => panic!("expected archive, got {other:?}"),
        };

        let mut zip = ZipArchive::new(Cursor::new(archive.bytes)).unwrap();
        assert!(zip.by_name("resources/js/a.js").is_ok());
        assert!(zip.by_name("resources/css/a.css").is_err());
        assert!(zip.by_name("resources-log.md").is_ok());
        assert!(zip.by_name("api-requests.md").is_ok());
    }

    #[test]
    fn colliding_names_are_resolved_within_a_group() {
        let resources = [
            resource("https://a.example/app.js", "js", "text/javascript", "one"),
            resource("https://b.example/app.js", "js", "text/javascript", "two"),
        ];
        let outcome = export(&resources, &[], &selection(&["js"]), "resources", generated())
            .unwrap();
        let archive = match outcome {
            ExportOutcome::Archive(a) => a,
            other => panic!("expected archive, got {other:?}"),
        };

        let mut zip = ZipArchive::new(Cursor::new(archive.bytes)).unwrap();
        let mut one = String::new();
        zip.by_name("resources/js/app.js")
            .unwrap()
            .read_to_string(&mut one)
            .unwrap();
        assert_eq!(one, "one");
        let mut two = String::new();
        zip.by_name("resources/js/app_1.js")
            .unwrap()
            .read_to_string(&mut two)
            .unwrap();
        assert_eq!(two, "two");
    }

    #[test]
    fn binary_content_is_decoded_into_the_entry() {
        // 0x89 PNG header bytes, base64-encoded.
        let resources = [resource(
            "https://x.com/logo.png",
            "png",
            "image/png",
            "iVBORw0KGgo=",
        )];
        let outcome = export(&resources, &[], &selection(&["png"]), "resources", generated())
            .unwrap();
        let archive = match outcome {
            ExportOutcome::Archive(a) => a,
            other => panic!("expected archive, got {other:?}"),
        };

        let mut zip = ZipArchive::new(Cursor::new(archive.bytes)).unwrap();
        let mut data = Vec::new();
        zip.by_name("resources/png/logo.png")
            .unwrap()
            .read_to_end(&mut data)
            .unwrap();
        assert_eq!(data, vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn archive_name_uses_prefix_and_stamp() {
        let resources = [resource("https://x.com/a.js", "js", "text/javascript", "x")];
        let outcome = export(&resources, &[], &selection(&["js"]), "capture", generated()).unwrap();
        match outcome {
            ExportOutcome::Archive(a) => {
                assert!(a.file_name.starts_with("capture_"));
                assert!(a.file_name.ends_with(".zip"));
            }
            other => panic!("expected archive, got {other:?}"),
        }
    }

    #[test]
    fn resolve_selection_defaults_to_all_observed() {
        let resources = [
            resource("https://x.com/a.js", "js", "", ""),
            resource("https://x.com/a.css", "css", "", ""),
        ];
        assert_eq!(
            resolve_selection(&[], &resources),
            selection(&["css", "js"])
        );
        assert_eq!(
            resolve_selection(&["js".to_string(), " ".to_string()], &resources),
            selection(&["js"])
        );
    }
}
