//! Constants shared across crates

/// Public URL prefix under which the upload directory is served.
pub const UPLOADS_PUBLIC_PATH: &str = "/uploads";

/// Sub-directory (inside the upload root) holding navigation logos.
pub const SVG_UPLOAD_SUBDIR: &str = "svg";

/// Every navigation logo must start with this prefix.
pub const LOGO_PATH_PREFIX: &str = "/uploads/svg/";

/// Every navigation logo must end with this extension.
pub const SVG_EXTENSION: &str = ".svg";

/// The only MIME type accepted by the logo upload endpoint.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Upper bound for a single uploaded SVG (5 MiB).
pub const MAX_SVG_SIZE_BYTES: usize = 5 * 1024 * 1024;

/// Generic message returned for every server-side failure.
pub const SERVER_ERROR_MESSAGE: &str = "服务器错误";
