//! OpenAPI documentation, served at `/api/openapi.json` and rendered by RapiDoc at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use crate::setup::routes::health;
use navsite_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Navsite API",
        version = "0.1.0",
        description = "Users, navigation sites and SVG logo uploads. Logos are uploaded first and referenced by their `/uploads/svg/...` path."
    ),
    paths(
        // Users
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::users::create_user,
        handlers::users::update_user,
        handlers::users::delete_user,
        // Navigation sites
        handlers::navigation::list_navigation,
        handlers::navigation::get_navigation,
        handlers::navigation::create_navigation,
        handlers::navigation::update_navigation,
        handlers::navigation::delete_navigation,
        // Upload
        handlers::upload::upload_svg,
        // Health
        health::health_check,
    ),
    components(
        schemas(
            models::User,
            models::CreateUserRequest,
            models::UpdateUserRequest,
            models::CreateUserResponse,
            models::NavigationSite,
            models::CreateNavigationRequest,
            models::UpdateNavigationRequest,
            models::UploadedFile,
            models::UploadResponse,
            models::MessageResponse,
            error::ErrorResponse,
            health::HealthCheckResponse,
        )
    ),
    tags(
        (name = "users", description = "User management"),
        (name = "navigation", description = "Navigation site management"),
        (name = "upload", description = "SVG logo upload"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/users",
            "/api/users/{id}",
            "/api/navigation",
            "/api/navigation/{id}",
            "/api/navigation/upload",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
