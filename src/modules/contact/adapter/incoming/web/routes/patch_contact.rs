use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::incoming::use_cases::{
    PatchContactCommand, PatchContactError,
};
use crate::modules::contact::application::ports::outgoing::PatchContactData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchContactRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub subject: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub message: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub read: PatchField<bool>,
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub archived: PatchField<bool>,
}

impl From<PatchContactRequest> for PatchContactData {
    fn from(req: PatchContactRequest) -> Self {
        PatchContactData {
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
            read: req.read,
            archived: req.archived,
        }
    }
}

/// Partially update a contact message
///
/// Typically used to mark a message read or archived.
#[utoipa::path(
    patch,
    path = "/contacts/{contact_id}",
    tag = "contacts",
    security(("BearerAuth" = [])),
    params(("contact_id" = String, Path, description = "Contact id (UUID)")),
    request_body = PatchContactRequest,
    responses(
        (status = 200, description = "Updated contact", body = Contact),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/contacts/{contact_id}")]
pub async fn patch_contact_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<PatchContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(contact_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found");
    };

    let command = match PatchContactCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.contact.patch.execute(contact_id, command).await {
        Ok(contact) => ApiResponse::success(contact),

        Err(PatchContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }

        Err(PatchContactError::RepositoryError(e)) => {
            error!("Repository error patching contact {}: {}", contact_id, e);
            ApiResponse::internal_error()
        }
    }
}
