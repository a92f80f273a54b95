//! Logo path validation
//!
//! A navigation logo must point into the SVG upload directory: `^/uploads/svg/.*\.svg$`.

use std::sync::LazyLock;

use regex::Regex;

use crate::AppError;

pub const INVALID_LOGO_PATH: &str = "Logo路径必须以/uploads/svg/开头并以.svg结尾";

static LOGO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/uploads/svg/.*\.svg$").expect("logo pattern is valid"));

/// Validate that `logo` starts with `/uploads/svg/` and ends with `.svg`.
pub fn validate_logo_path(logo: &str) -> Result<(), AppError> {
    if !LOGO_PATTERN.is_match(logo) {
        return Err(AppError::BadRequest(INVALID_LOGO_PATH.to_string()));
    }
    Ok(())
}
