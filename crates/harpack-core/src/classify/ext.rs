//! URL extension extraction.

/// Extracts a lower-cased extension candidate from a URL's path.
///
/// Looks at the final path segment only: the text after its last `.`.
/// Returns `None` when the URL does not parse, the segment has no dot,
/// the candidate is empty, or it is longer than 10 characters. Query
/// strings never leak in because extraction works on the parsed path.
pub fn extension_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next().unwrap_or("");
    extension_of(segment)
}

/// Extension of a single filename, lower-cased.
fn extension_of(filename: &str) -> Option<String> {
    let ext = filename.rsplit('.').next()?;
    if ext.is_empty() || ext == filename || ext.len() > 10 {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal() {
        assert_eq!(
            extension_from_url("https://x.com/app.js").as_deref(),
            Some("js")
        );
        assert_eq!(
            extension_from_url("https://x.com/a/b/archive.tar.gz").as_deref(),
            Some("gz")
        );
    }

    #[test]
    fn lowercases() {
        assert_eq!(
            extension_from_url("https://x.com/IMAGE.PNG").as_deref(),
            Some("png")
        );
    }

    #[test]
    fn query_does_not_leak() {
        assert_eq!(
            extension_from_url("https://x.com/app.js?v=123.456").as_deref(),
            Some("js")
        );
    }

    #[test]
    fn no_dot_in_segment() {
        assert_eq!(extension_from_url("https://x.com/api/users"), None);
        assert_eq!(extension_from_url("https://x.com/FILE"), None);
        assert_eq!(extension_from_url("https://x.com/"), None);
    }

    #[test]
    fn trailing_dot() {
        assert_eq!(extension_from_url("https://x.com/file."), None);
    }

    #[test]
    fn too_long_rejected() {
        assert_eq!(extension_from_url("https://x.com/f.verylongextension"), None);
        assert_eq!(
            extension_from_url("https://x.com/f.exactlyten").as_deref(),
            Some("exactlyten")
        );
    }

    #[test]
    fn malformed_url_fails_closed() {
        assert_eq!(extension_from_url("not a url"), None);
        assert_eq!(extension_from_url(""), None);
    }
}
