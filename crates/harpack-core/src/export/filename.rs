//! Archive filenames: derivation from the URL and collision resolution
//! within one type group.

use std::collections::HashSet;

/// Derives the base filename for an item: the URL-decoded final path
/// segment, query stripped. Falls back to `file_<index>` when the URL
/// does not parse, yields an empty segment, or decodes to invalid UTF-8.
pub fn filename_from_url(url: &str, index: usize) -> String {
    derive(url).unwrap_or_else(|| format!("file_{index}"))
}

fn derive(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next().unwrap_or("");
    let segment = segment.split('?').next().unwrap_or("");
    if segment.is_empty() {
        return None;
    }
    urlencoding::decode(segment).ok().map(|s| s.into_owned())
}

/// Tracks used names within one type group. Collisions get `_<index>`
/// inserted before the extension (or appended when there is none);
/// tracking is per group, never global.
#[derive(Debug, Default)]
pub struct NameAllocator {
    used: HashSet<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, derived: String, index: usize) -> String {
        let name = if self.used.contains(&derived) {
            rename_with_index(&derived, index)
        } else {
            derived
        };
        self.used.insert(name.clone());
        name
    }
}

/// `app.js` + 3 → `app_3.js`; `LICENSE` + 2 → `LICENSE_2`.
fn rename_with_index(name: &str, index: usize) -> String {
    match name.rfind('.') {
        Some(pos) => format!("{}_{index}{}", &name[..pos], &name[pos..]),
        None => format!("{name}_{index}"),
    }
}
