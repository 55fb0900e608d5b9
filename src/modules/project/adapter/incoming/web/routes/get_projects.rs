use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::ProjectListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectListQuery {
    /// Only featured (`true`) or only non-featured (`false`) projects
    pub featured: Option<bool>,
}

async fn list_projects(data: &AppState, filter: ProjectListFilter) -> actix_web::HttpResponse {
    match data.project.get_list.execute(filter).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => {
            error!("Failed to list projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// List projects
///
/// Public. Sorted by `order` ascending, then by creation time.
#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    params(ProjectListQuery),
    responses(
        (status = 200, description = "Projects in display order", body = [Project]),
        (status = 400, description = "Malformed query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/projects")]
pub async fn get_projects_handler(
    query: web::Query<ProjectListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = ProjectListFilter {
        featured: query.into_inner().featured,
    };
    list_projects(&data, filter).await
}

/// List featured projects
#[utoipa::path(
    get,
    path = "/projects/featured",
    tag = "projects",
    responses(
        (status = 200, description = "Featured projects in display order", body = [Project]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/projects/featured")]
pub async fn get_featured_projects_handler(data: web::Data<AppState>) -> impl Responder {
    list_projects(&data, ProjectListFilter::featured_only()).await
}
