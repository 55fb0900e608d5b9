use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::ports::incoming::use_cases::DeleteContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a contact message
#[utoipa::path(
    delete,
    path = "/contacts/{contact_id}",
    tag = "contacts",
    security(("BearerAuth" = [])),
    params(("contact_id" = String, Path, description = "Contact id (UUID)")),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/contacts/{contact_id}")]
pub async fn delete_contact_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(contact_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found");
    };

    match data.contact.delete.execute(contact_id).await {
        Ok(()) => {
            info!(%contact_id, "Contact deleted");
            ApiResponse::no_content()
        }

        Err(DeleteContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }

        Err(DeleteContactError::RepositoryError(e)) => {
            error!("Repository error deleting contact {}: {}", contact_id, e);
            ApiResponse::internal_error()
        }
    }
}
