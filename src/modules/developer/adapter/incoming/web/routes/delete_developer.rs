use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::developer::application::ports::incoming::use_cases::DeleteDeveloperError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete the developer profile
#[utoipa::path(
    delete,
    path = "/developer/{developer_id}",
    tag = "developer",
    security(("BearerAuth" = [])),
    params(("developer_id" = String, Path, description = "Developer id (UUID)")),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No profile with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/developer/{developer_id}")]
pub async fn delete_developer_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(developer_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("DEVELOPER_NOT_FOUND", "Developer not found");
    };

    match data.developer.delete.execute(developer_id).await {
        Ok(()) => {
            info!(%developer_id, "Developer profile deleted");
            ApiResponse::no_content()
        }

        Err(DeleteDeveloperError::NotFound) => {
            ApiResponse::not_found("DEVELOPER_NOT_FOUND", "Developer not found")
        }

        Err(DeleteDeveloperError::RepositoryError(e)) => {
            error!("Repository error deleting developer {}: {}", developer_id, e);
            ApiResponse::internal_error()
        }
    }
}
