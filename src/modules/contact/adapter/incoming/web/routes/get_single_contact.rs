use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::incoming::use_cases::GetSingleContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a contact message by id
#[utoipa::path(
    get,
    path = "/contacts/{contact_id}",
    tag = "contacts",
    security(("BearerAuth" = [])),
    params(("contact_id" = String, Path, description = "Contact id (UUID)")),
    responses(
        (status = 200, description = "Contact found", body = Contact),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/contacts/{contact_id}")]
pub async fn get_single_contact_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(contact_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found");
    };

    match data.contact.get_single.execute(contact_id).await {
        Ok(contact) => ApiResponse::success(contact),

        Err(GetSingleContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }

        Err(GetSingleContactError::QueryFailed(e)) => {
            error!("Query error fetching contact {}: {}", contact_id, e);
            ApiResponse::internal_error()
        }
    }
}
