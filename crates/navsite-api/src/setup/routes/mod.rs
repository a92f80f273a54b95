//! Route configuration and setup.
//!
//! Resource routes live under `/api`; health checks in [health](health).

pub mod health;

use crate::api_doc::ApiDoc;
use crate::constants::{API_PREFIX, MULTIPART_OVERHEAD_BYTES, OPENAPI_JSON_PATH};
use crate::handlers;
use crate::middleware::request_id_middleware;
use crate::state::AppState;
use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use navsite_core::constants::{MAX_SVG_SIZE_BYTES, UPLOADS_PUBLIC_PATH};
use navsite_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Body limit for JSON endpoints
const JSON_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let json_routes = user_routes()
        .merge(navigation_routes())
        .layer(RequestBodyLimitLayer::new(JSON_BODY_LIMIT_BYTES));

    let app = json_routes
        .merge(upload_routes())
        .route("/health", get(health::health_check))
        .with_state(state)
        .route(
            OPENAPI_JSON_PATH,
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(utoipa_rapidoc::RapiDoc::new(OPENAPI_JSON_PATH).path("/docs"))
        .nest_service(UPLOADS_PUBLIC_PATH, ServeDir::new(config.upload_dir()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware));

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .context("CORS_ORIGINS contains an invalid origin")?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}

fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/users", API_PREFIX),
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            &format!("{}/users/{{id}}", API_PREFIX),
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
}

fn navigation_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/navigation", API_PREFIX),
            get(handlers::navigation::list_navigation).post(handlers::navigation::create_navigation),
        )
        .route(
            &format!("{}/navigation/{{id}}", API_PREFIX),
            get(handlers::navigation::get_navigation)
                .put(handlers::navigation::update_navigation)
                .delete(handlers::navigation::delete_navigation),
        )
}

fn upload_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/navigation/upload", API_PREFIX),
            post(handlers::upload::upload_svg),
        )
        .layer(DefaultBodyLimit::max(
            MAX_SVG_SIZE_BYTES + MULTIPART_OVERHEAD_BYTES,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_accepts_explicit_origins() {
        let config = Config {
            cors_origins: vec![
                "https://nav.example.com".to_string(),
                "http://localhost:5173".to_string(),
            ],
            ..Config::default()
        };
        assert!(setup_cors(&config).is_ok());
    }

    #[test]
    fn cors_rejects_malformed_origin() {
        let config = Config {
            cors_origins: vec!["bad\norigin".to_string()],
            ..Config::default()
        };
        assert!(setup_cors(&config).is_err());
    }
}
