//! Application settings read from the environment and optional dotenv files.

use std::path::Path;

use crate::error::FoodiezzError;

pub const DEFAULT_SOCRATA_DOMAIN: &str = "data.sfgov.org";
pub const DEFAULT_SOCRATA_DATASET_ID: &str = "jjew-r69b";
pub const DEFAULT_PAGE_LIMIT: usize = 10;
/// Upper bound on rows requested in the single search round trip.
pub const DEFAULT_FETCH_LIMIT: u32 = 50_000;

/// Dotenv file checked before `.env`.
pub const CONFIG_ENV_FILE: &str = "env/config.env";

/// Settings for one run of the finder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Socrata host, e.g. `data.sfgov.org`.
    pub socrata_domain: String,
    /// Dataset queried for food truck schedules.
    pub socrata_dataset_id: String,
    /// Optional SODA application token.
    pub app_token: Option<String>,
    /// Rows shown per page of output.
    pub page_limit: usize,
    pub fetch_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            socrata_domain: DEFAULT_SOCRATA_DOMAIN.to_string(),
            socrata_dataset_id: DEFAULT_SOCRATA_DATASET_ID.to_string(),
            app_token: None,
            page_limit: DEFAULT_PAGE_LIMIT,
            fetch_limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

impl AppConfig {
    /// Loads `env/config.env` and `.env` when present, then reads the process
    /// environment. Variables already set in the environment win over the files.
    pub fn from_env() -> Result<Self, FoodiezzError> {
        if Path::new(CONFIG_ENV_FILE).exists() {
            if let Err(e) = dotenvy::from_filename(CONFIG_ENV_FILE) {
                tracing::warn!("Failed to load {}: {}", CONFIG_ENV_FILE, e);
            }
        }
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset or blank keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FoodiezzError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();
        Ok(Self {
            socrata_domain: get("SOCRATA_DOMAIN").unwrap_or(defaults.socrata_domain),
            socrata_dataset_id: get("SOCRATA_DATASET_ID").unwrap_or(defaults.socrata_dataset_id),
            app_token: get("APP_TOKEN"),
            page_limit: match get("PAGE_LIMIT") {
                Some(raw) => positive("PAGE_LIMIT", &raw)? as usize,
                None => defaults.page_limit,
            },
            fetch_limit: match get("FETCH_LIMIT") {
                Some(raw) => positive("FETCH_LIMIT", &raw)?,
                None => defaults.fetch_limit,
            },
        })
    }

    /// Overrides the page size, rejecting zero.
    pub fn with_page_limit(mut self, page_limit: usize) -> Result<Self, FoodiezzError> {
        if page_limit == 0 {
            return Err(FoodiezzError::InvalidConfig(
                "page limit must be greater than zero".to_string(),
            ));
        }
        self.page_limit = page_limit;
        Ok(self)
    }
}

fn positive(key: &str, raw: &str) -> Result<u32, FoodiezzError> {
    match soda_api::SoqlQuery::parse_count(raw) {
        Ok(0) => Err(FoodiezzError::InvalidConfig(format!(
            "{} must be greater than zero",
            key
        ))),
        Ok(n) => Ok(n),
        Err(e) => Err(FoodiezzError::InvalidConfig(format!("{}: {}", key, e))),
    }
}
