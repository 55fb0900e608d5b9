use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest, LoginResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from the admin dashboard
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Admin email address
    #[schema(example = "admin@example.com")]
    pub email: String,

    /// Admin password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Admin login
///
/// Checks the credential against the configured admin account and returns a
/// signed access token.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = LoginResponse,
            example = json!({
                "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                "user": { "email": "admin@example.com", "role": "admin" }
            })
        ),
        (
            status = 400,
            description = "Malformed credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Password cannot be empty" }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.login_admin_use_case.execute(request).await {
        Ok(response) => {
            info!(email = %response.user.email, "Admin logged in successfully");
            ApiResponse::success(response)
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::auth::application::use_cases::login_admin::{ILoginAdminUseCase, LoginUser};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct MockLoginSuccess;

    #[async_trait]
    impl ILoginAdminUseCase for MockLoginSuccess {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
            Ok(LoginResponse {
                access_token: "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.access".to_string(),
                user: LoginUser {
                    email: "admin@example.com".to_string(),
                    role: Role::Admin,
                },
            })
        }
    }

    #[derive(Clone)]
    struct MockLoginFailure(LoginError);

    #[async_trait]
    impl ILoginAdminUseCase for MockLoginFailure {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
            Err(self.0.clone())
        }
    }

    /// Records the normalized email it was called with.
    #[derive(Clone, Default)]
    struct RecordingLogin {
        seen: Arc<Mutex<Option<String>>>,
    }

    #[async_trait]
    impl ILoginAdminUseCase for RecordingLogin {
        async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
            *self.seen.lock().unwrap() = Some(request.email().to_string());
            Err(LoginError::InvalidCredentials)
        }
    }

    fn login_json() -> serde_json::Value {
        serde_json::json!({
            "email": "admin@example.com",
            "password": "SecurePass123!"
        })
    }

    #[actix_web::test]
    async fn test_login_success() {
        let app_state = TestAppStateBuilder::default()
            .with_login_admin(MockLoginSuccess)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(login_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["access_token"].is_string());
        assert_eq!(body["user"]["email"], "admin@example.com");
        assert_eq!(body["user"]["role"], "admin");
        assert!(body.get("success").is_none());
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials() {
        let app_state = TestAppStateBuilder::default()
            .with_login_admin(MockLoginFailure(LoginError::InvalidCredentials))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(login_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_login_internal_failures_hide_details() {
        for failure in [
            LoginError::CredentialStoreError("pool closed".to_string()),
            LoginError::PasswordVerificationFailed("argon2 blew up".to_string()),
            LoginError::TokenGenerationFailed("JWT signing failed".to_string()),
        ] {
            let app_state = TestAppStateBuilder::default()
                .with_login_admin(MockLoginFailure(failure))
                .build();

            let app =
                test::init_service(App::new().app_data(app_state).service(login_admin_handler))
                    .await;

            let req = test::TestRequest::post()
                .uri("/auth/login")
                .set_json(login_json())
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 500);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
            assert_eq!(body["error"]["message"], "An unexpected error occurred");
        }
    }

    #[actix_web::test]
    async fn test_login_validation_errors() {
        let app_state = TestAppStateBuilder::default()
            .with_login_admin(MockLoginSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(login_admin_handler),
        )
        .await;

        let payloads = [
            serde_json::json!({ "email": "", "password": "x" }),
            serde_json::json!({ "email": "admin@example.com", "password": "   " }),
            serde_json::json!({ "email": "admin@example.com" }),
        ];

        for payload in payloads {
            let req = test::TestRequest::post()
                .uri("/auth/login")
                .set_json(&payload)
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400, "payload {} should be rejected", payload);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[actix_web::test]
    async fn test_login_email_normalized_before_use_case() {
        let recorder = RecordingLogin::default();
        let app_state = TestAppStateBuilder::default()
            .with_login_admin(recorder.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(serde_json::json!({
                "email": "  Admin@Example.COM ",
                "password": "SecurePass123!"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
        assert_eq!(
            recorder.seen.lock().unwrap().as_deref(),
            Some("admin@example.com")
        );
    }
}
