use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::{AdminPrincipal, Role};

pub const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token was issued by an unknown issuer")]
    InvalidIssuer,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// JWT claims for an admin session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    /// Kept as text so a foreign role decodes and is rejected by role, not by shape.
    pub role: String,
    pub token_type: String,
    pub iss: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// `None` when the token carries a role this API does not grant.
    pub fn principal(&self) -> Option<AdminPrincipal> {
        let role = Role::from_claim(&self.role)?;

        Some(AdminPrincipal {
            id: self.sub.clone(),
            email: self.email.clone(),
            role,
        })
    }
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, principal: &AdminPrincipal) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
