pub mod navigation;
pub mod upload;
pub mod users;
