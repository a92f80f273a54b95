//! Database repositories for the data access layer
//!
//! Each repository owns a clone of the pool and issues parameterized statements for
//! one table. None of them open transactions.

pub mod navigation;
pub mod user;

pub use navigation::NavigationRepository;
pub use user::UserRepository;
