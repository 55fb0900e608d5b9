use std::env;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Try `.env.{RUST_ENV}` first, then fall back to `.env`.
pub fn load_env_files() -> String {
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    environment
}

/// Environment lookup. Tests pass a map-backed closure instead of touching
/// the process environment.
pub trait EnvLookup {
    fn get(&self, key: &str) -> Option<String>;

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(key))
    }

    fn parsed_or<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }),
        }
    }
}

pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env(environment: String) -> Result<Self, ConfigError> {
        Self::from_lookup(environment, &ProcessEnv)
    }

    pub fn from_lookup(environment: String, env: &impl EnvLookup) -> Result<Self, ConfigError> {
        let host = env.get("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = env.parsed_or("PORT", 3001u16)?;
        let database_url = env.required("DATABASE_URL")?;
        let max_connections = env.parsed_or("DB_MAX_CONNECTIONS", 10u32)?;
        let run_migrations = env.parsed_or("RUN_MIGRATIONS", false)?;

        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }

        let cors_allowed_origins = env
            .get("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment,
            host,
            port,
            database_url,
            max_connections,
            run_migrations,
            cors_allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
