use actix_web::{patch, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::entities::{Project, ProjectImage};
use crate::modules::project::application::ports::incoming::use_cases::{
    PatchProjectCommand, PatchProjectError,
};
use crate::modules::project::application::ports::outgoing::PatchProjectData;
use crate::shared::api::ApiResponse;
use crate::shared::date::InputDate;
use crate::shared::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchProjectRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub long_description: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub featured_image: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<ProjectImage>>)]
    pub images: PatchField<Vec<ProjectImage>>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub technologies: PatchField<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub github_url: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub live_url: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub featured: PatchField<bool>,
    #[serde(default)]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub start_date: PatchField<InputDate>,
    #[serde(default)]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub end_date: PatchField<InputDate>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub order: PatchField<i32>,
}

impl From<PatchProjectRequest> for PatchProjectData {
    fn from(req: PatchProjectRequest) -> Self {
        PatchProjectData {
            title: req.title,
            description: req.description,
            long_description: req.long_description,
            featured_image: req.featured_image,
            images: req.images,
            technologies: req.technologies,
            github_url: req.github_url,
            live_url: req.live_url,
            featured: req.featured,
            start_date: req.start_date.map(Into::into),
            end_date: req.end_date.map(Into::into),
            order: req.order,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Partially update a project
#[utoipa::path(
    patch,
    path = "/projects/{project_id}",
    tag = "projects",
    security(("BearerAuth" = [])),
    params(("project_id" = String, Path, description = "Project id (UUID)")),
    request_body = PatchProjectRequest,
    responses(
        (status = 200, description = "Updated project", body = Project),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/projects/{project_id}")]
pub async fn patch_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<PatchProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(project_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found");
    };

    let command = match PatchProjectCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.project.patch.execute(project_id, command).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(e @ PatchProjectError::InvalidDateRange) => ApiResponse::validation_error(&e.to_string()),

        Err(PatchProjectError::RepositoryError(e)) => {
            error!("Repository error patching project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
