use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::developer::application::domain::entities::{Developer, Skill, SocialLink};
use crate::modules::developer::application::ports::incoming::use_cases::{
    CreateDeveloperCommand, CreateDeveloperError,
};
use crate::modules::developer::application::ports::outgoing::CreateDeveloperData;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Required text defaults to empty so a missing field reports the same
/// `"<field> is required"` message as a blank one.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeveloperRequest {
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Systems Engineer")]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub resume: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl From<CreateDeveloperRequest> for CreateDeveloperData {
    fn from(req: CreateDeveloperRequest) -> Self {
        CreateDeveloperData {
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

/// Create the developer profile
#[utoipa::path(
    post,
    path = "/developer",
    tag = "developer",
    security(("BearerAuth" = [])),
    request_body = CreateDeveloperRequest,
    responses(
        (status = 201, description = "Profile created", body = Developer),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (
            status = 409,
            description = "A profile already exists",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "DEVELOPER_ALREADY_EXISTS",
                    "message": "A developer profile already exists"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/developer")]
pub async fn create_developer_handler(
    _admin: AdminUser,
    req: web::Json<CreateDeveloperRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateDeveloperCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.developer.create.execute(command).await {
        Ok(developer) => {
            info!(developer_id = %developer.id, "Developer profile created");
            ApiResponse::created(developer)
        }

        Err(CreateDeveloperError::AlreadyExists) => ApiResponse::conflict(
            "DEVELOPER_ALREADY_EXISTS",
            "A developer profile already exists",
        ),

        Err(CreateDeveloperError::RepositoryError(e)) => {
            error!("Repository error creating developer: {}", e);
            ApiResponse::internal_error()
        }
    }
}
