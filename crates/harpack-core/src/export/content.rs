//! Export-time content decoding.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// MIME fragments whose stored content is base64 and must be decoded to
/// raw bytes for the archive.
const BINARY_MIME_FRAGMENTS: &[&str] = &[
    "image",
    "font",
    "octet-stream",
    "gzip",
    "zip",
    "wasm",
    "audio",
    "video",
    "pdf",
    "glb",
    "gltf",
    "3ds",
];

/// True when the declared MIME belongs to a binary family.
pub fn is_binary_mime(mime_type: &str) -> bool {
    BINARY_MIME_FRAGMENTS
        .iter()
        .any(|fragment| mime_type.contains(fragment))
}

/// Decodes stored content for the archive. Binary-family items are
/// base64-decoded; a decode failure is non-fatal and keeps the stored
/// text unchanged. Everything else passes through as text.
pub fn decode_content(content: &str, mime_type: &str) -> Vec<u8> {
    if content.is_empty() {
        return Vec::new();
    }
    if is_binary_mime(mime_type) {
        match BASE64.decode(content) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!("base64 decode failed, keeping raw content: {}", err);
                content.as_bytes().to_vec()
            }
        }
    } else {
        content.as_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_families() {
        assert!(is_binary_mime("image/png"));
        assert!(is_binary_mime("application/pdf"));
        assert!(is_binary_mime("font/woff2"));
        assert!(!is_binary_mime("text/css"));
        assert!(!is_binary_mime(""));
    }

    #[test]
    fn decodes_base64_for_binary_mimes() {
        // "hi" in base64.
        assert_eq!(decode_content("aGk=", "image/png"), b"hi");
    }

    #[test]
    fn text_passes_through() {
        assert_eq!(decode_content("body{}", "text/css"), b"body{}");
    }

    #[test]
    fn bad_base64_keeps_raw_content() {
        assert_eq!(
            decode_content("not base64!", "image/png"),
            b"not base64!".to_vec()
        );
    }

    #[test]
    fn empty_content_is_empty() {
        assert_eq!(decode_content("", "image/png"), Vec::<u8>::new());
    }
}
