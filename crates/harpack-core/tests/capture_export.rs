//! Integration test: replay a HAR capture through the collector into a
//! live store service, export a selection, and verify the archive.

use std::collections::BTreeSet;
use std::io::{Cursor, Read, Write};

use chrono::{DateTime, Local, Utc};
use tempfile::NamedTempFile;
use zip::ZipArchive;

use harpack_core::collector::Collector;
use harpack_core::export::{self, ExportOutcome};
use harpack_core::har;
use harpack_core::store::{spawn_store_service, StoreRequest, StoreResponse};

const SESSION_HAR: &str = r#"{
    "log": {
        "version": "1.2",
        "entries": [
            {
                "startedDateTime": "2026-08-07T10:00:00.000Z",
                "request": { "method": "GET", "url": "https://x.com/assets/app.js" },
                "response": {
                    "status": 200,
                    "content": {
                        "mimeType": "application/javascript",
                        "size": 14,
                        "text": "console.log(1)"
                    }
                }
            },
            {
                "startedDateTime": "2026-08-07T10:00:01.000Z",
                "request": { "method": "GET", "url": "https://x.com/assets/logo.png" },
                "response": {
                    "status": 200,
                    "content": {
                        "mimeType": "image/png",
                        "size": 8,
                        "text": "iVBORw0KGgo=",
                        "encoding": "base64"
                    }
                }
            },
            {
                "startedDateTime": "2026-08-07T10:00:02.000Z",
                "request": { "method": "GET", "url": "https://x.com/assets/app.js" },
                "response": {
                    "status": 200,
                    "content": {
                        "mimeType": "application/javascript",
                        "size": 14,
                        "text": "console.log(2)"
                    }
                }
            },
            {
                "startedDateTime": "2026-08-07T10:00:03.000Z",
                "request": {
                    "method": "POST",
                    "url": "https://x.com/api/v1/users",
                    "postData": { "text": "{\"page\":1}" }
                },
                "response": {
                    "status": 201,
                    "content": {
                        "mimeType": "application/json",
                        "size": 12,
                        "text": "{\"id\":42}"
                    }
                }
            }
        ]
    }
}"#;

fn generated_at() -> DateTime<Local> {
    "2026-08-07T12:00:00Z"
        .parse::<DateTime<Utc>>()
        .unwrap()
        .with_timezone(&Local)
}

#[tokio::test]
async fn har_replay_classifies_stores_and_exports() {
    let mut har_file = NamedTempFile::new().unwrap();
    har_file.write_all(SESSION_HAR.as_bytes()).unwrap();
    har_file.flush().unwrap();
    let har = har::load_har(har_file.path()).unwrap();

    let (handle, _service) = spawn_store_service();
    let collector = Collector::new(handle.clone());
    let accepted = har::replay(&har, &collector).await;
    assert_eq!(accepted, 4, "every entry produces exactly one record");

    let (resources, api_requests) = match handle.request(StoreRequest::GetAllData).await.unwrap() {
        StoreResponse::AllData {
            resources,
            api_requests,
        } => (resources, api_requests),
        other => panic!("unexpected response: {other:?}"),
    };

    // The duplicate app.js capture was dropped (first write wins); the
    // API call went to the other sequence.
    assert_eq!(resources.len(), 2);
    assert_eq!(resources[0].content, "console.log(1)");
    assert_eq!(api_requests.len(), 1);
    assert_eq!(api_requests[0].method, "POST");

    let selected: BTreeSet<String> = export::resolve_selection(&[], &resources);
    assert_eq!(selected.len(), 2);

    let outcome =
        export::export(&resources, &api_requests, &selected, "resources", generated_at()).unwrap();
    let archive = match outcome {
        ExportOutcome::Archive(archive) => archive,
        other => panic!("expected an archive, got {other:?}"),
    };
    assert!(archive.file_name.starts_with("resources_"));
    assert!(archive.file_name.ends_with(".zip"));

    let mut zip = ZipArchive::new(Cursor::new(archive.bytes)).unwrap();

    let mut js = String::new();
    zip.by_name("resources/js/app.js")
        .unwrap()
        .read_to_string(&mut js)
        .unwrap();
    assert_eq!(js, "console.log(1)");

    let mut png = Vec::new();
    zip.by_name("resources/png/logo.png")
        .unwrap()
        .read_to_end(&mut png)
        .unwrap();
    assert_eq!(png, vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a]);

    let mut log = String::new();
    zip.by_name("resources-log.md")
        .unwrap()
        .read_to_string(&mut log)
        .unwrap();
    assert!(log.contains("**Total resources**: 2"));
    assert!(log.contains("| js | 1 | 14 B |"));

    let mut api_log = String::new();
    zip.by_name("api-requests.md")
        .unwrap()
        .read_to_string(&mut api_log)
        .unwrap();
    assert!(api_log.contains("## 1. POST https://x.com/api/v1/users"));
    assert!(api_log.contains("\"page\": 1"));
    assert!(api_log.contains("\"id\": 42"));
}

#[tokio::test]
async fn clear_then_export_reports_nothing_selected() {
    let har: harpack_core::har::HarLog = serde_json::from_str(SESSION_HAR).unwrap();
    let (handle, _service) = spawn_store_service();
    let collector = Collector::new(handle.clone());
    har::replay(&har, &collector).await;

    handle.request(StoreRequest::ClearData).await.unwrap();

    let (resources, api_requests) = match handle.request(StoreRequest::GetAllData).await.unwrap() {
        StoreResponse::AllData {
            resources,
            api_requests,
        } => (resources, api_requests),
        other => panic!("unexpected response: {other:?}"),
    };
    assert!(resources.is_empty());
    assert!(api_requests.is_empty());

    let selected = export::resolve_selection(&[], &resources);
    let outcome =
        export::export(&resources, &api_requests, &selected, "resources", generated_at()).unwrap();
    assert!(matches!(outcome, ExportOutcome::NothingSelected));
}
