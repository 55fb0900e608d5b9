use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Subject id carried by every admin token.
pub const ADMIN_SUBJECT: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
        }
    }

    pub fn from_claim(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single identity allowed to edit portfolio content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminPrincipal {
    #[schema(example = "admin")]
    pub id: String,
    #[schema(example = "admin@example.com")]
    pub email: String,
    pub role: Role,
}

impl AdminPrincipal {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: ADMIN_SUBJECT.to_string(),
            email: email.into(),
            role: Role::Admin,
        }
    }
}

/// Admin identity together with the hash its password is checked against.
#[derive(Clone)]
pub struct AdminCredential {
    pub principal: AdminPrincipal,
    pub password_hash: String,
}

impl fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredential")
            .field("principal", &self.principal)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}
