use std::path::PathBuf;
use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::auth::adapter::outgoing::security::Argon2Params;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Process-wide configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    pub client_url: String,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: u64,
    pub argon2: Argon2Params,
}

impl AppConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 3000;
    pub const DEFAULT_CLIENT_URL: &'static str = "http://localhost:5173";
    pub const DEFAULT_UPLOAD_DIR: &'static str = "uploads";
    pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        // Try .env.{environment} first, then fall back to .env
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let secret_key = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if secret_key.len() < JwtConfig::MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!(
                    "must be at least {} characters long for HS256",
                    JwtConfig::MIN_SECRET_LEN
                ),
            });
        }

        let jwt = JwtConfig {
            secret_key,
            issuer: get("JWT_ISSUER").unwrap_or_else(|| JwtConfig::DEFAULT_ISSUER.to_string()),
        };

        let defaults = Argon2Params::default();
        let argon2 = Argon2Params {
            memory_kib: parse_or("ARGON2_MEMORY_KIB", get("ARGON2_MEMORY_KIB"), defaults.memory_kib)?,
            iterations: parse_or("ARGON2_ITERATIONS", get("ARGON2_ITERATIONS"), defaults.iterations)?,
            parallelism: parse_or(
                "ARGON2_PARALLELISM",
                get("ARGON2_PARALLELISM"),
                defaults.parallelism,
            )?,
        };

        let max_upload_bytes = parse_or(
            "MAX_UPLOAD_BYTES",
            get("MAX_UPLOAD_BYTES"),
            Self::DEFAULT_MAX_UPLOAD_BYTES,
        )?;
        if max_upload_bytes == 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_UPLOAD_BYTES",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            database_url,
            host: get("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            port: parse_or("PORT", get("PORT"), Self::DEFAULT_PORT)?,
            jwt,
            client_url: get("CLIENT_URL").unwrap_or_else(|| Self::DEFAULT_CLIENT_URL.to_string()),
            upload_dir: PathBuf::from(
                get("UPLOAD_DIR").unwrap_or_else(|| Self::DEFAULT_UPLOAD_DIR.to_string()),
            ),
            max_upload_bytes,
            argon2,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}
