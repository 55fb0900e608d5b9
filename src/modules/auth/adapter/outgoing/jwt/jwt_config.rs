use crate::config::{ConfigError, EnvLookup, ProcessEnv};

const MAX_ACCESS_EXPIRY: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&ProcessEnv)
    }

    pub fn from_lookup(env: &impl EnvLookup) -> Result<Self, ConfigError> {
        let secret_key = env.required("JWT_SECRET")?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let access_token_expiry = env.parsed_or("JWT_ACCESS_EXPIRY", 86400i64)?;
        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: format!("must be between 1 and {} seconds", MAX_ACCESS_EXPIRY),
            });
        }

        let issuer = env
            .get("JWT_ISSUER")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "portfolio-api".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
