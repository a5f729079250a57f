use std::env;

/// Default interface the HTTP server binds to when `HOST` is unset.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port the HTTP server binds to when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading service configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),

    #[error("invalid value `{value}` for environment variable `{key}`")]
    Invalid { key: &'static str, value: String },
}

/// Origins accepted by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parses a comma separated origin list. A `*` entry anywhere in the list
    /// allows every origin. Returns `None` when the list names no origin at all.
    pub fn parse(raw: &str) -> Option<Self> {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect();

        if origins.is_empty() {
            None
        } else if origins.iter().any(|origin| origin == "*") {
            Some(CorsOrigins::Any)
        } else {
            Some(CorsOrigins::List(origins))
        }
    }
}

/// # Service Settings
///
/// Runtime configuration read from the environment (after `.env` has been
/// loaded by the binary).
///
/// ## Variables
/// - `MONGO_URL` (required): MongoDB connection string
/// - `DB_NAME` (required): logical database holding the `status_checks` collection
/// - `CORS_ORIGINS` (required): comma separated origins, or `*`
/// - `HOST` (optional, default `127.0.0.1`)
/// - `PORT` (optional, default `8080`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mongo_url: String,
    pub db_name: String,
    pub cors_origins: CorsOrigins,
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let mongo_url = require("MONGO_URL")?;
        let db_name = require("DB_NAME")?;
        let raw_origins = require("CORS_ORIGINS")?;
        let cors_origins =
            CorsOrigins::parse(&raw_origins).ok_or_else(|| ConfigError::Invalid {
                key: "CORS_ORIGINS",
                value: raw_origins.clone(),
            })?;
        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid {
                    key: "PORT",
                    value: raw.clone(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            mongo_url,
            db_name,
            cors_origins,
            host,
            port,
        })
    }
}
