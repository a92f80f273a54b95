//! Application state and sub-state extractors.
//!
//! AppState is split into sub-states so handlers can extract only what they need via
//! Axum's `FromRef`.

use axum::extract::FromRef;
use navsite_core::constants::MAX_SVG_SIZE_BYTES;
use navsite_db::{NavigationRepository, UserRepository};
use navsite_storage::UploadStorage;
use sqlx::PgPool;
use std::sync::Arc;

/// Database pool and repositories
#[derive(Clone)]
pub struct DbState {
    pub pool: PgPool,
    pub user_repository: UserRepository,
    pub navigation_repository: NavigationRepository,
}

impl DbState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            user_repository: UserRepository::new(pool.clone()),
            navigation_repository: NavigationRepository::new(pool.clone()),
            pool,
        }
    }
}

/// SVG upload storage and limits
#[derive(Clone)]
pub struct UploadState {
    pub storage: Arc<dyn UploadStorage>,
    pub max_file_size: usize,
}

impl UploadState {
    pub fn new(storage: Arc<dyn UploadStorage>) -> Self {
        Self {
            storage,
            max_file_size: MAX_SVG_SIZE_BYTES,
        }
    }
}

pub struct AppState {
    pub db: DbState,
    pub uploads: UploadState,
}

impl AppState {
    pub fn new(pool: PgPool, storage: Arc<dyn UploadStorage>) -> Self {
        Self {
            db: DbState::new(pool),
            uploads: UploadState::new(storage),
        }
    }
}

impl FromRef<Arc<AppState>> for DbState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.db.clone()
    }
}

impl FromRef<Arc<AppState>> for UploadState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.uploads.clone()
    }
}
