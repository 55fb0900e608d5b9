use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::entities::{Project, ProjectImage};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError,
};
use crate::modules::project::application::ports::outgoing::CreateProjectData;
use crate::shared::api::ApiResponse;
use crate::shared::date::InputDate;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(default)]
    #[schema(example = "Portfolio API")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub long_description: Option<String>,
    pub featured_image: Option<String>,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub start_date: Option<InputDate>,
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub end_date: Option<InputDate>,
    #[serde(default)]
    pub order: i32,
}

impl From<CreateProjectRequest> for CreateProjectData {
    fn from(req: CreateProjectRequest) -> Self {
        CreateProjectData {
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

/// Create a project
#[utoipa::path(
    post,
    path = "/projects",
    tag = "projects",
    security(("BearerAuth" = [])),
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateProjectCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.project.create.execute(command).await {
        Ok(project) => {
            info!(project_id = %project.id, "Project created");
            ApiResponse::created(project)
        }

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
