//! Navigation site handlers
//!
//! CRUD over the `navigation_sites` table. Logos must point at an uploaded SVG
//! (`/uploads/svg/*.svg`); update is a partial patch.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::constants::{NAVIGATION_DELETED, NAVIGATION_NOT_FOUND};
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson, ValidatedPath};
use crate::state::AppState;
use navsite_core::models::{
    CreateNavigationRequest, MessageResponse, NavigationPatch, NavigationSite, NewNavigationSite,
    UpdateNavigationRequest,
};
use navsite_core::AppError;

fn not_found() -> HttpAppError {
    AppError::NotFound(NAVIGATION_NOT_FOUND.to_string()).into()
}

/// List all navigation sites
#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "All navigation sites ordered by id", body = Vec<NavigationSite>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "navigation"
)]
#[tracing::instrument(skip(state))]
pub async fn list_navigation(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let sites = state.db.navigation_repository.list().await?;
    Ok(Json(sites))
}

/// Get a navigation site by id
#[utoipa::path(
    get,
    path = "/api/navigation/{id}",
    params(
        ("id" = i64, Path, description = "Navigation site ID")
    ),
    responses(
        (status = 200, description = "Navigation site found", body = NavigationSite),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Navigation site not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "navigation"
)]
#[tracing::instrument(skip(state))]
pub async fn get_navigation(
    State(state): State<Arc<AppState>>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, HttpAppError> {
    let site = state
        .db
        .navigation_repository
        .get(id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(site))
}

/// Create a navigation site
#[utoipa::path(
    post,
    path = "/api/navigation",
    request_body = CreateNavigationRequest,
    responses(
        (status = 201, description = "Navigation site created", body = NavigationSite),
        (status = 400, description = "Missing fields or invalid logo path", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "navigation"
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_navigation(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateNavigationRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let site = NewNavigationSite::try_from(request)?;

    let created = state.db.navigation_repository.create(&site).await?;

    tracing::info!(navigation_id = created.id, "Navigation site created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a navigation site.
///
/// Only non-empty `logo`, `url` and `name` are applied; `description` is applied whenever
/// the key is present, including `""` and `null`.
#[utoipa::path(
    put,
    path = "/api/navigation/{id}",
    params(
        ("id" = i64, Path, description = "Navigation site ID")
    ),
    request_body = UpdateNavigationRequest,
    responses(
        (status = 200, description = "Navigation site updated", body = NavigationSite),
        (status = 400, description = "Invalid logo path or nothing to update", body = ErrorResponse),
        (status = 404, description = "Navigation site not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "navigation"
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_navigation(
    State(state): State<Arc<AppState>>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateNavigationRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let repository = &state.db.navigation_repository;

    if !repository.exists(id).await? {
        return Err(not_found());
    }

    let patch = NavigationPatch::try_from(request)?;

    // Not transactional: a concurrent delete between the statements surfaces as 404
    if repository.update(id, &patch).await? == 0 {
        return Err(not_found());
    }

    let updated = repository.get(id).await?.ok_or_else(not_found)?;

    tracing::info!(
        navigation_id = id,
        fields = patch.field_count(),
        "Navigation site updated"
    );

    Ok(Json(updated))
}

/// Delete a navigation site
#[utoipa::path(
    delete,
    path = "/api/navigation/{id}",
    params(
        ("id" = i64, Path, description = "Navigation site ID")
    ),
    responses(
        (status = 200, description = "Navigation site deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Navigation site not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "navigation"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_navigation(
    State(state): State<Arc<AppState>>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, HttpAppError> {
    if !state.db.navigation_repository.delete(id).await? {
        return Err(not_found());
    }

    tracing::info!(navigation_id = id, "Navigation site deleted");

    Ok(Json(MessageResponse::new(NAVIGATION_DELETED)))
}
