//! Runtime settings.
//!
//! Layers, lowest priority first:
//! 1. Built-in defaults (credentials baked in at build time, if any)
//! 2. A TOML file, `encore.toml` in the working directory or an explicit path
//! 3. `ENCORE_*` environment variables

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use encore_application::CatalogConfig;
use encore_domain::{ClientCredentials, validate_market};
use serde::Deserialize;
use thiserror::Error;

/// Default catalog API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";
/// Default token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

const ENV_PREFIX: &str = "ENCORE";
const DEFAULT_FILE_STEM: &str = "encore";
const APP_DIR: &str = "encore";
const TOKEN_FILE: &str = "token.json";

/// Errors produced while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A source could not be read or a value could not be converted.
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    /// A required credential is absent or blank.
    #[error("Missing {0}; set it in encore.toml or the ENCORE_ environment")]
    MissingCredential(&'static str),

    /// A value is present but unusable.
    #[error("Invalid setting {key}: {message}")]
    Invalid {
        /// Setting name.
        key: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// No token path configured and no platform data directory found.
    #[error("No data directory available; set token_path explicitly")]
    NoDataDir,
}

/// Shape of the merged sources before validation.
#[derive(Debug, Deserialize)]
struct RawSettings {
    client_id: Option<String>,
    client_secret: Option<String>,
    api_base_url: String,
    token_url: String,
    market: String,
    albums_per_page: u32,
    cache_ttl_secs: u64,
    token_path: Option<PathBuf>,
    request_timeout_secs: u64,
}

/// Validated settings.
#[derive(Clone)]
pub struct Settings {
    credentials: ClientCredentials,
    /// Catalog API root.
    pub api_base_url: String,
    /// Token endpoint.
    pub token_url: String,
    /// Market for top-track requests.
    pub market: String,
    /// Albums per page.
    pub albums_per_page: u32,
    /// Staleness window for cached artist and top-track reads.
    pub cache_ttl: Duration,
    /// Where the access token is persisted.
    pub token_path: PathBuf,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Settings {
    /// Loads settings from defaults, the optional file and the process
    /// environment.
    ///
    /// With `path` set, the file must exist. Without it, `encore.toml` in
    /// the working directory is used when present.
    ///
    /// # Errors
    /// Returns [`SettingsError`] if a source is malformed or credentials
    /// are missing.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_from(path, None)
    }

    /// Like [`Settings::load`], reading environment variables from `env`
    /// instead of the process when given.
    ///
    /// # Errors
    /// See [`Settings::load`].
    pub fn load_from(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, SettingsError> {
        let mut builder = defaults()?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_FILE_STEM).required(false)),
        };

        let raw: RawSettings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()?
            .try_deserialize()?;

        Self::validate(raw)
    }

    fn validate(raw: RawSettings) -> Result<Self, SettingsError> {
        let client_id = required(raw.client_id, "client_id")?;
        let client_secret = required(raw.client_secret, "client_secret")?;

        if raw.albums_per_page == 0 {
            return Err(SettingsError::Invalid {
                key: "albums_per_page",
                message: "must be at least 1".to_string(),
            });
        }
        if raw.request_timeout_secs == 0 {
            return Err(SettingsError::Invalid {
                key: "request_timeout_secs",
                message: "must be at least 1".to_string(),
            });
        }

        validate_market(&raw.market).map_err(|e| SettingsError::Invalid {
            key: "market",
            message: e.to_string(),
        })?;

        let token_path = match raw.token_path {
            Some(path) => path,
            None => default_token_path().ok_or(SettingsError::NoDataDir)?,
        };

        Ok(Self {
            credentials: ClientCredentials::new(client_id, client_secret),
            api_base_url: raw.api_base_url,
            token_url: raw.token_url,
            market: raw.market,
            albums_per_page: raw.albums_per_page,
            cache_ttl: Duration::from_secs(raw.cache_ttl_secs),
            token_path,
            request_timeout: Duration::from_secs(raw.request_timeout_secs),
        })
    }

    /// Client credentials for the token exchange.
    #[must_use]
    pub const fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    /// Catalog tunables derived from these settings.
    #[must_use]
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            market: self.market.clone(),
            albums_per_page: self.albums_per_page,
            cache_ttl: self.cache_ttl,
            ..CatalogConfig::default()
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("credentials", &self.credentials)
            .field("api_base_url", &self.api_base_url)
            .field("token_url", &self.token_url)
            .field("market", &self.market)
            .field("albums_per_page", &self.albums_per_page)
            .field("cache_ttl", &self.cache_ttl)
            .field("token_path", &self.token_path)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// `<data dir>/encore/token.json`.
#[must_use]
pub fn default_token_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(TOKEN_FILE))
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, SettingsError> {
    let catalog = CatalogConfig::default();
    let mut builder = Config::builder()
        .set_default("api_base_url", DEFAULT_API_BASE_URL)?
        .set_default("token_url", DEFAULT_TOKEN_URL)?
        .set_default("market", catalog.market)?
        .set_default("albums_per_page", i64::from(catalog.albums_per_page))?
        .set_default("cache_ttl_secs", catalog.cache_ttl.as_secs())?
        .set_default("request_timeout_secs", 30_u64)?;

    if let Some(id) = option_env!("ENCORE_CLIENT_ID") {
        builder = builder.set_default("client_id", id)?;
    }
    if let Some(secret) = option_env!("ENCORE_CLIENT_SECRET") {
        builder = builder.set_default("client_secret", secret)?;
    }

    Ok(builder)
}

fn required(value: Option<String>, key: &'static str) -> Result<String, SettingsError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(SettingsError::MissingCredential(key))
}
