//! User handlers
//!
//! CRUD over the `users` table. Name and email are stored as given; the display date
//! is computed once from the server's local clock.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::{Local, Utc};
use std::sync::Arc;

use crate::constants::{USER_CREATED, USER_DELETED, USER_NOT_FOUND, USER_UPDATED};
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson, ValidatedPath};
use crate::state::AppState;
use navsite_core::models::{
    format_display_date, CreateUserRequest, CreateUserResponse, MessageResponse,
    UpdateUserRequest, User,
};
use navsite_core::AppError;

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users ordered by id", body = Vec<User>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
#[tracing::instrument(skip(state))]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let users = state.db.user_repository.list().await?;
    Ok(Json(users))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
#[tracing::instrument(skip(state))]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, HttpAppError> {
    let user = state
        .db
        .user_repository
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

    Ok(Json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let date = format_display_date(Local::now());

    let id = state
        .db
        .user_repository
        .create(
            request.name.as_deref(),
            request.email.as_deref(),
            &date,
            Utc::now(),
        )
        .await?;

    tracing::info!(user_id = id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            id,
            message: USER_CREATED.to_string(),
        }),
    ))
}

/// Replace a user's name and email
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Invalid id or body", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let updated = state
        .db
        .user_repository
        .update(
            id,
            request.name.as_deref(),
            request.email.as_deref(),
            Utc::now(),
        )
        .await?;

    if !updated {
        return Err(AppError::NotFound(USER_NOT_FOUND.to_string()).into());
    }

    Ok(Json(MessageResponse::new(USER_UPDATED)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, HttpAppError> {
    if !state.db.user_repository.delete(id).await? {
        return Err(AppError::NotFound(USER_NOT_FOUND.to_string()).into());
    }

    tracing::info!(user_id = id, "User deleted");

    Ok(Json(MessageResponse::new(USER_DELETED)))
}
