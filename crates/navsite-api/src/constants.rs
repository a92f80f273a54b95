//! API constants
//!
//! Route prefix and the client-facing messages returned by handlers.

/// API base path prefix
pub const API_PREFIX: &str = "/api";

/// OpenAPI document path, also used by the RapiDoc UI
pub const OPENAPI_JSON_PATH: &str = "/api/openapi.json";

/// Multipart overhead allowed on top of the SVG size cap
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

// Users
pub const USER_CREATED: &str = "用户创建成功";
pub const USER_UPDATED: &str = "用户更新成功";
pub const USER_DELETED: &str = "用户删除成功";
pub const USER_NOT_FOUND: &str = "用户不存在";

// Navigation sites
pub const NAVIGATION_NOT_FOUND: &str = "导航网站不存在";
pub const NAVIGATION_DELETED: &str = "导航网站删除成功";

// Uploads
pub const UPLOAD_SUCCESS: &str = "文件上传成功";
pub const ONLY_SVG_ALLOWED: &str = "只允许上传SVG文件";
pub const NO_FILE_SELECTED: &str = "请选择要上传的文件";
pub const INVALID_SVG_FILE: &str = "无效的SVG文件";
pub const FILE_TOO_LARGE: &str = "文件大小不能超过5MB";
pub const INVALID_MULTIPART: &str = "无效的上传请求";

// Extractor rejections
pub const INVALID_ID: &str = "无效的ID";
pub const INVALID_REQUEST_BODY: &str = "请求体格式错误";
