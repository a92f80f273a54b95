//! SVG upload checks
//!
//! Uploads are accepted on two cheap heuristics: the declared MIME type, and a
//! signature check on the stored bytes (trimmed content starts with `<svg` and ends
//! with `</svg>`). Neither parses XML.

use crate::constants::SVG_CONTENT_TYPE;

/// Strip MIME parameters (e.g. "image/svg+xml; charset=utf-8" -> "image/svg+xml").
pub fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Whether the declared content type is exactly the SVG MIME type.
pub fn is_svg_content_type(content_type: &str) -> bool {
    normalize_mime_type(content_type).eq_ignore_ascii_case(SVG_CONTENT_TYPE)
}

/// Whether `content`, once trimmed of whitespace and any byte-order mark, is bounded
/// by `<svg` ... `</svg>`.
pub fn has_svg_signature(content: &str) -> bool {
    let trimmed = content.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    trimmed.starts_with("<svg") && trimmed.ends_with("</svg>")
}
