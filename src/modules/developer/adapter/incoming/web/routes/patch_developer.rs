use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::developer::application::domain::entities::{Developer, Skill, SocialLink};
use crate::modules::developer::application::ports::incoming::use_cases::{
    PatchDeveloperCommand, PatchDeveloperError,
};
use crate::modules::developer::application::ports::outgoing::PatchDeveloperData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

/// Omitted fields are kept. `null` clears optional fields and is rejected on
/// required ones.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchDeveloperRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub bio: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub phone: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub address: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub avatar: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub resume: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<SocialLink>>)]
    pub social_links: PatchField<Vec<SocialLink>>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<Skill>>)]
    pub skills: PatchField<Vec<Skill>>,
}

impl From<PatchDeveloperRequest> for PatchDeveloperData {
    fn from(req: PatchDeveloperRequest) -> Self {
        PatchDeveloperData {
            name: req.name,
            title: req.title,
            bio: req.bio,
            email: req.email,
            phone: req.phone,
            address: req.address,
            avatar: req.avatar,
            resume: req.resume,
            social_links: req.social_links,
            skills: req.skills,
        }
    }
}

/// Partially update the developer profile
#[utoipa::path(
    patch,
    path = "/developer/{developer_id}",
    tag = "developer",
    security(("BearerAuth" = [])),
    params(("developer_id" = String, Path, description = "Developer id (UUID)")),
    request_body = PatchDeveloperRequest,
    responses(
        (status = 200, description = "Updated profile", body = Developer),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No profile with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/developer/{developer_id}")]
pub async fn patch_developer_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<PatchDeveloperRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(developer_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("DEVELOPER_NOT_FOUND", "Developer not found");
    };

    let command = match PatchDeveloperCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.developer.patch.execute(developer_id, command).await {
        Ok(developer) => ApiResponse::success(developer),

        Err(PatchDeveloperError::NotFound) => {
            ApiResponse::not_found("DEVELOPER_NOT_FOUND", "Developer not found")
        }

        Err(PatchDeveloperError::RepositoryError(e)) => {
            error!("Repository error patching developer {}: {}", developer_id, e);
            ApiResponse::internal_error()
        }
    }
}
