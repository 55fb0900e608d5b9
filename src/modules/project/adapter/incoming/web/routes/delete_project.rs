use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project
#[utoipa::path(
    delete,
    path = "/projects/{project_id}",
    tag = "projects",
    security(("BearerAuth" = [])),
    params(("project_id" = String, Path, description = "Project id (UUID)")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/projects/{project_id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(project_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found");
    };

    match data.project.delete.execute(project_id).await {
        Ok(()) => {
            info!(%project_id, "Project deleted");
            ApiResponse::no_content()
        }

        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
