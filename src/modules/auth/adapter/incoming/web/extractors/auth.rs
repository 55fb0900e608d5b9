use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::AdminPrincipal;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::shared::api::ApiResponse;

/// Admin identity proven by a valid bearer access token.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub principal: AdminPrincipal,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn authenticate(req: &HttpRequest) -> Result<AdminUser, HttpResponse> {
    let token_provider = req
        .app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| {
            tracing::error!("TokenProvider is not registered as app data");
            ApiResponse::internal_error()
        })?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        )
    })?;

    let claims = token_provider.verify_token(&token).map_err(|e| {
        tracing::warn!(error = %e, path = %req.path(), "Rejected bearer token");
        ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
    })?;

    let principal = claims
        .principal()
        .filter(|_| claims.token_type == ACCESS_TOKEN_TYPE)
        .ok_or_else(|| {
            tracing::warn!(
                token_type = %claims.token_type,
                role = %claims.role,
                "Rejected non-access token"
            );
            ApiResponse::unauthorized("INVALID_TOKEN_TYPE", "Invalid token type")
        })?;

    Ok(AdminUser { principal })
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map_err(create_api_error))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|s| s.to_string())
}
