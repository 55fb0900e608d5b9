use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::{
    credential_store::AdminCredentialStore, password_hasher::PasswordHasher,
    token_provider::TokenProvider,
};

// ========================= Login Request =========================
/// Login request. The email is trimmed and lowercased; its syntax is not
/// checked, so any address other than the admin's ends as `InvalidCredentials`.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        // Only reject empty passwords; surrounding whitespace is part of the secret
        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Credential lookup failed: {0}")]
    CredentialStoreError(String),

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LoginUser {
    #[schema(example = "admin@example.com")]
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    pub user: LoginUser,
}

// ============================ Login Admin Use Case =============================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminUseCase<C>
where
    C: AdminCredentialStore,
{
    credentials: C,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<C> LoginAdminUseCase<C>
where
    C: AdminCredentialStore,
{
    pub fn new(
        credentials: C,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            credentials,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<C> ILoginAdminUseCase for LoginAdminUseCase<C>
where
    C: AdminCredentialStore,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        let credential = self
            .credentials
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::CredentialStoreError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &credential.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(&credential.principal)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginResponse {
            access_token,
            user: LoginUser {
                email: credential.principal.email,
                role: credential.principal.role,
            },
        })
    }
}
