use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a project by id
#[utoipa::path(
    get,
    path = "/projects/{project_id}",
    tag = "projects",
    params(("project_id" = String, Path, description = "Project id (UUID)")),
    responses(
        (status = 200, description = "Project found", body = Project),
        (
            status = 404,
            description = "Project not found",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PROJECT_NOT_FOUND", "message": "Project not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/projects/{project_id}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(project_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found");
    };

    match data.project.get_single.execute(project_id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetSingleProjectError::QueryFailed(e)) => {
            error!("Query error fetching project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
