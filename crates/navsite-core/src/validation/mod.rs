//! Validation modules

pub mod logo;
pub mod svg;

pub use logo::{validate_logo_path, INVALID_LOGO_PATH};
pub use svg::{has_svg_signature, is_svg_content_type, normalize_mime_type};
