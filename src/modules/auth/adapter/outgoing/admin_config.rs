use std::fmt;

use email_address::EmailAddress;
use password_hash::PasswordHash;

use crate::auth::application::domain::entities::{AdminCredential, AdminPrincipal};
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};
use crate::config::{ConfigError, EnvLookup, ProcessEnv};

use super::security::format_aware_hasher::is_bcrypt_hash;

#[derive(Clone)]
pub enum AdminPassword {
    /// PHC string (argon2) or bcrypt hash, used as-is.
    Hashed(String),
    /// Plaintext, hashed once when the credential is built.
    Plain(String),
}

impl fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminPassword::Hashed(_) => f.write_str("Hashed([REDACTED])"),
            AdminPassword::Plain(_) => f.write_str("Plain([REDACTED])"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub email: String,
    pub password: AdminPassword,
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&ProcessEnv)
    }

    pub fn from_lookup(env: &impl EnvLookup) -> Result<Self, ConfigError> {
        let email = env.required("ADMIN_EMAIL")?.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(ConfigError::Invalid {
                key: "ADMIN_EMAIL",
                reason: "must be a valid email address".to_string(),
            });
        }

        let password = match env.required("ADMIN_PASSWORD_HASH") {
            Ok(hash) => {
                let hash = hash.trim().to_string();
                if !is_bcrypt_hash(&hash) {
                    PasswordHash::new(&hash).map_err(|e| ConfigError::Invalid {
                        key: "ADMIN_PASSWORD_HASH",
                        reason: e.to_string(),
                    })?;
                }
                AdminPassword::Hashed(hash)
            }
            Err(_) => {
                let plain = env
                    .required("ADMIN_PASSWORD")
                    .map_err(|_| ConfigError::Missing("ADMIN_PASSWORD_HASH or ADMIN_PASSWORD"))?;
                AdminPassword::Plain(plain)
            }
        };

        Ok(Self { email, password })
    }

    /// Resolve the configured secret into a fixed hash.
    pub async fn into_credential(
        self,
        hasher: &dyn PasswordHasher,
    ) -> Result<AdminCredential, HashError> {
        let password_hash = match self.password {
            AdminPassword::Hashed(hash) => hash,
            AdminPassword::Plain(plain) => {
                tracing::warn!("ADMIN_PASSWORD is plaintext; prefer ADMIN_PASSWORD_HASH");
                hasher.hash_password(&plain).await?
            }
        };

        Ok(AdminCredential {
            principal: AdminPrincipal::new(self.email),
            password_hash,
        })
    }
}
