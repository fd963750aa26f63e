//! Zip assembly for the export artifact.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use super::ExportError;

/// One resource file going into the archive.
#[derive(Debug)]
pub struct ArchiveEntry {
    /// Full entry path (`resources/<type>/<filename>`).
    pub path: String,
    pub data: Vec<u8>,
}

/// Builds the zip in memory: resource entries first, then the reports.
/// Any failure discards the partial archive.
pub fn build_archive(
    entries: &[ArchiveEntry],
    resources_log: Option<&str>,
    api_log: Option<&str>,
) -> Result<Vec<u8>, ExportError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for entry in entries {
        zip.start_file(entry.path.as_str(), options)?;
        zip.write_all(&entry.data)?;
    }
    if let Some(log) = resources_log {
        zip.start_file("resources-log.md", options)?;
        zip.write_all(log.as_bytes())?;
    }
    if let Some(log) = api_log {
        zip.start_file("api-requests.md", options)?;
        zip.write_all(log.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}
