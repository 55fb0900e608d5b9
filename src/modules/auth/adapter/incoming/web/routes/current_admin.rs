use actix_web::{get, Responder};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::AdminPrincipal;
use crate::shared::api::ApiResponse;

/// Current admin
///
/// Returns the principal encoded in the presented bearer token.
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Token is valid", body = AdminPrincipal),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
    )
)]
#[get("/auth/me")]
pub async fn current_admin_handler(user: AdminUser) -> impl Responder {
    ApiResponse::success(user.principal)
}
