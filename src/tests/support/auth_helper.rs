use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::AdminPrincipal;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub const TEST_JWT_SECRET: &str = "test_secret_key_min_32_characters_long";
pub const TEST_ISSUER: &str = "portfolio-api";
pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
        access_token_expiry: 3600,
    })
}

/// Shape the `AdminUser` extractor looks up in app data.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

pub fn valid_token() -> String {
    test_jwt_service()
        .generate_access_token(&AdminPrincipal::new(TEST_ADMIN_EMAIL))
        .expect("token should be generated")
}

pub fn expired_token() -> String {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
        access_token_expiry: -120,
    })
    .generate_access_token(&AdminPrincipal::new(TEST_ADMIN_EMAIL))
    .expect("token should be generated")
}

/// Correctly signed token carrying an arbitrary `token_type`.
pub fn token_with_type(token_type: &str) -> String {
    signed_token(token_type, "admin")
}

/// Correctly signed access token carrying an arbitrary `role`.
pub fn token_with_role(role: &str) -> String {
    signed_token("access", role)
}

fn signed_token(token_type: &str, role: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = serde_json::json!({
        "sub": "admin",
        "email": TEST_ADMIN_EMAIL,
        "role": role,
        "token_type": token_type,
        "iss": TEST_ISSUER,
        "iat": now,
        "nbf": now,
        "exp": now + 600,
    });

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("token should be encoded")
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
