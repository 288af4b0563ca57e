// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    slug: SlugSettings,
}

/// Tuning for slug resolution on store writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlugSettings {
    /// Leave the store being renamed out of its own match count.
    pub exclude_self: bool,
    /// Re-resolutions allowed after the storage layer rejects a duplicate slug.
    pub conflict_retries: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://stores.db?mode=rwc".into()
}

fn default_max_connections() -> u32 {
    16
}

fn default_conflict_retries() -> u32 {
    2
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                    ))
                })?,
            None => default_max_connections(),
        };

        let exclude_self = lookup("STORE_SLUG_EXCLUDE_SELF")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let conflict_retries = match lookup("STORE_SLUG_CONFLICT_RETRIES") {
            Some(raw) => raw.parse::<u32>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "STORE_SLUG_CONFLICT_RETRIES must be a non-negative integer, got {raw:?}"
                ))
            })?,
            None => default_conflict_retries(),
        };

        Ok(Self {
            database_url,
            database_max_connections,
            slug: SlugSettings {
                exclude_self,
                conflict_retries,
            },
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn slug_settings(&self) -> SlugSettings {
        self.slug
    }
}
