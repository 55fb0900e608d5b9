use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactCommand, CreateContactError,
};
use crate::modules::contact::application::ports::outgoing::CreateContactData;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public contact form payload. Inbox flags are not accepted from clients.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContactRequest {
    #[serde(default)]
    #[schema(example = "Grace Hopper")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "grace@example.com")]
    pub email: String,
    pub subject: Option<String>,
    #[serde(default)]
    #[schema(example = "Would love to chat about a project.")]
    pub message: String,
}

impl From<CreateContactRequest> for CreateContactData {
    fn from(req: CreateContactRequest) -> Self {
        CreateContactData {
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
        }
    }
}

/// Submit a contact message
#[utoipa::path(
    post,
    path = "/contacts",
    tag = "contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Message stored", body = Contact),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/contacts")]
pub async fn create_contact_handler(
    req: web::Json<CreateContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateContactCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.contact.create.execute(command).await {
        Ok(contact) => ApiResponse::created(contact),

        Err(CreateContactError::RepositoryError(e)) => {
            error!("Repository error storing contact: {}", e);
            ApiResponse::internal_error()
        }
    }
}
