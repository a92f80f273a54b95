//! Filename generation shared by storage backends.
//!
//! Format: `<unix-millis>-<sanitized base name>.svg`.

use std::path::Path;

use navsite_core::constants::SVG_EXTENSION;

use crate::traits::{StorageError, StorageResult};

const MAX_BASE_NAME_LENGTH: usize = 100;
const FALLBACK_BASE_NAME: &str = "file";

/// Reduce a client-declared filename to a safe base name.
///
/// Directory components and the extension are dropped, characters outside
/// alphanumerics and `.` `-` `_` become `_`, and anything containing `..` or
/// ending up empty is replaced by `file`.
pub fn sanitize_base_name(original: &str) -> String {
    let name_only = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(original);

    let stem = match name_only.rfind('.') {
        Some(idx) => &name_only[..idx],
        None => name_only,
    };

    if stem.contains("..") {
        return FALLBACK_BASE_NAME.to_string();
    }

    let sanitized: String = stem
        .chars()
        .take(MAX_BASE_NAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches('_').is_empty() {
        return FALLBACK_BASE_NAME.to_string();
    }

    sanitized
}

/// Generate the stored filename for an upload made at `timestamp_millis`.
pub fn generate_filename(original: &str, timestamp_millis: i64) -> String {
    format!(
        "{}-{}{}",
        timestamp_millis,
        sanitize_base_name(original),
        SVG_EXTENSION
    )
}

/// Reject names that could address anything outside the storage directory.
pub fn validate_filename(filename: &str) -> StorageResult<()> {
    if filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
    {
        return Err(StorageError::InvalidKey(filename.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_name_has_timestamp_base_and_svg_extension() {
        assert_eq!(
            generate_filename("github.svg", 1718000000000),
            "1718000000000-github.svg"
        );
        assert_eq!(generate_filename("logo.SVG", 1), "1-logo.svg");
        assert_eq!(generate_filename("noext", 5), "5-noext.svg");
    }

    #[test]
    fn sanitize_strips_directories_and_odd_characters() {
        assert_eq!(sanitize_base_name("/etc/passwd"), "passwd");
        assert_eq!(sanitize_base_name("C:/icons/my logo.svg"), "my_logo");
        assert_eq!(sanitize_base_name("a&b=c.svg"), "a_b_c");
        assert_eq!(sanitize_base_name("my-file_1.min.svg"), "my-file_1.min");
        assert_eq!(sanitize_base_name("图标.svg"), "图标");
    }

    #[test]
    fn sanitize_falls_back_for_empty_or_traversal_names() {
        assert_eq!(sanitize_base_name(""), "file");
        assert_eq!(sanitize_base_name(".svg"), "file");
        assert_eq!(sanitize_base_name("..."), "file");
        assert_eq!(sanitize_base_name("???.svg"), "file");
    }

    #[test]
    fn sanitize_truncates_long_names() {
        let long = format!("{}.svg", "a".repeat(500));
        assert_eq!(sanitize_base_name(&long).len(), MAX_BASE_NAME_LENGTH);
    }

    #[test]
    fn validate_filename_rejects_traversal() {
        assert!(validate_filename("1-a.svg").is_ok());
        assert!(validate_filename("").is_err());
        assert!(validate_filename("../a.svg").is_err());
        assert!(validate_filename("svg/a.svg").is_err());
        assert!(validate_filename("a\\b.svg").is_err());
    }
}
