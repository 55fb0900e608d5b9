use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::developer::application::domain::entities::Developer;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List developer profiles
///
/// Public. The array holds at most one profile.
#[utoipa::path(
    get,
    path = "/developer",
    tag = "developer",
    responses(
        (status = 200, description = "Stored profiles", body = [Developer]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/developer")]
pub async fn get_developers_handler(data: web::Data<AppState>) -> impl Responder {
    match data.developer.get_list.execute().await {
        Ok(developers) => ApiResponse::success(developers),
        Err(e) => {
            error!("Failed to list developers: {}", e);
            ApiResponse::internal_error()
        }
    }
}
