//! Navsite Database Library
//!
//! Repositories over a shared `PgPool`, one per table.

pub mod db;

pub use db::{NavigationRepository, UserRepository};
