//! Character encoding detection and transcoding.
//!
//! Handles two encoding concerns: sniffing the charset of raw HTML bytes
//! from meta tags, and decoding persisted lexicon rows written by legacy
//! single-byte tooling (windows-1252 fallback when a row is not UTF-8).

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use regex::Regex;

/// Match `<meta charset="...">` tag.
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect character encoding from HTML bytes.
///
/// Looks for charset declarations in the following order:
/// 1. `<meta charset="...">`
/// 2. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 3. Defaults to UTF-8 if no declaration found
///
/// Only examines the first 1024 bytes for performance.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    if let Some(caps) = CHARSET_META_RE.captures(&head_str) {
        if let Some(encoding) = caps.get(1).and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        {
            return encoding;
        }
    }
    if let Some(caps) = CONTENT_TYPE_CHARSET_RE.captures(&head_str) {
        if let Some(encoding) = caps.get(1).and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        {
            return encoding;
        }
    }
    UTF_8
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Detects the encoding and converts, replacing invalid characters with �
/// rather than failing.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

/// Decode one persisted lexicon row, falling back to windows-1252 when the
/// row is not valid UTF-8. Legacy tables were written on cp1252 systems and
/// single rows of such files routinely fail strict UTF-8 decoding.
#[must_use]
pub fn decode_row(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}
