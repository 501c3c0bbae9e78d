use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment (dev, staging, prod)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// CORS allowed origins, comma separated. Any origin when unset.
    pub cors_origins: Option<String>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Full database URL, takes precedence over the individual parts
    pub db_url: Option<String>,
    pub db_host: Option<String>,
    #[serde(default = "default_db_port")]
    pub db_port: u16,
    pub db_database: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,

    /// Insert the sample batch into the inventory table during bootstrap
    #[serde(default)]
    pub db_seed: bool,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        Self::from_vars(std::env::vars())
    }

    /// Build the configuration from key/value pairs (keys are matched case-insensitively)
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Allowed CORS origins, or `None` when every origin is allowed
    pub fn cors_origin_list(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .cors_origins
            .as_deref()?
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty() && *o != "*")
            .map(str::to_string)
            .collect();
        if origins.is_empty() {
            None
        } else {
            Some(origins)
        }
    }

    /// Postgres connection string.
    ///
    /// Returns `DB_URL` when set, otherwise assembles one from `DB_HOST`,
    /// `DB_PORT`, `DB_DATABASE`, `DB_USER` and `DB_PASSWORD`. `None` means the
    /// database bootstrap is skipped.
    pub fn database_url(&self) -> Option<String> {
        if let Some(url) = self.db_url.as_deref().filter(|u| !u.is_empty()) {
            return Some(url.to_string());
        }

        let host = self.db_host.as_deref().filter(|h| !h.is_empty())?;
        let credentials = match (&self.db_user, &self.db_password) {
            (Some(user), Some(password)) => format!("{}:{}@", user, password),
            (Some(user), None) => format!("{}@", user),
            _ => String::new(),
        };
        let database = self
            .db_database
            .as_deref()
            .map(|d| format!("/{}", d))
            .unwrap_or_default();

        Some(format!("postgres://{}{}:{}{}", credentials, host, self.db_port, database))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            cors_origins: None,
            service_name: default_service_name(),
            db_url: None,
            db_host: None,
            db_port: default_db_port(),
            db_database: None,
            db_user: None,
            db_password: None,
            db_seed: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvError(#[from] envy::Error),
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_db_port() -> u16 {
    5432
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_service_name() -> String {
    "inventory-api".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}
