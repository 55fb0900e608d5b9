use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::developer::application::domain::entities::Developer;
use crate::modules::developer::application::ports::incoming::use_cases::GetSingleDeveloperError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a developer profile by id
#[utoipa::path(
    get,
    path = "/developer/{developer_id}",
    tag = "developer",
    params(("developer_id" = String, Path, description = "Developer id (UUID)")),
    responses(
        (status = 200, description = "Profile found", body = Developer),
        (status = 404, description = "No profile with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/developer/{developer_id}")]
pub async fn get_single_developer_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(developer_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("DEVELOPER_NOT_FOUND", "Developer not found");
    };

    match data.developer.get_single.execute(developer_id).await {
        Ok(developer) => ApiResponse::success(developer),

        Err(GetSingleDeveloperError::NotFound) => {
            ApiResponse::not_found("DEVELOPER_NOT_FOUND", "Developer not found")
        }

        Err(GetSingleDeveloperError::QueryError(e)) => {
            error!("Query error fetching developer {}: {}", developer_id, e);
            ApiResponse::internal_error()
        }
    }
}
