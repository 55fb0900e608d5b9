use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::domain::entities::Contact;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List contact messages, newest first
#[utoipa::path(
    get,
    path = "/contacts",
    tag = "contacts",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Inbox", body = [Contact]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/contacts")]
pub async fn get_contacts_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.contact.get_list.execute().await {
        Ok(contacts) => ApiResponse::success(contacts),
        Err(e) => {
            error!("Failed to list contacts: {}", e);
            ApiResponse::internal_error()
        }
    }
}
