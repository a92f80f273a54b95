//! Domain models and request/response DTOs

pub mod common;
pub mod navigation;
pub mod upload;
pub mod user;

pub use common::MessageResponse;
pub use navigation::{
    CreateNavigationRequest, NavigationPatch, NavigationSite, NewNavigationSite,
    UpdateNavigationRequest,
};
pub use upload::{UploadResponse, UploadedFile};
pub use user::{
    format_display_date, CreateUserRequest, CreateUserResponse, UpdateUserRequest, User,
};
