//! Run configuration
//!
//! All connection parameters, the API endpoint and the run limits live in
//! one `AppConfig`, loaded from YAML or built from defaults and validated
//! once at startup.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Fallback fetch limit when a configured value is not an integer
pub const DEFAULT_FETCH_LIMIT: u32 = 10;

/// Fallback export row count when a configured value is not an integer
pub const DEFAULT_EXPORT_COUNT: u32 = 5;

/// Fetch limit used by a full run when nothing is configured
pub const RUN_FETCH_LIMIT: u32 = 1000;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "breed-loader.yaml";

/// Breeds endpoint
pub const DEFAULT_API_URL: &str = "https://catfact.ninja/breeds";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete configuration for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database connection settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Breeds API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Limits and outputs of a run
    #[serde(default)]
    pub run: RunConfig,
}

impl AppConfig {
    /// Parse a config from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load from an explicit path, else `breed-loader.yaml` if present,
    /// else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::from_file(default_path);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        let api_url = url::Url::parse(&self.api.url)?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "api.url must be an http(s) URL, got scheme '{}'",
                api_url.scheme()
            )));
        }

        if self.database.table.trim().is_empty() {
            return Err(Error::invalid_value(
                "database.table",
                "table name must not be empty",
            ));
        }

        if self.database.table.contains('\0') {
            return Err(Error::invalid_value(
                "database.table",
                "table name must not contain NUL",
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Database
// ============================================================================

/// PostgreSQL connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection string; overrides the individual fields when set
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Name of the partitioned breed table
    pub table: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            database: "postgres".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            table: "breed".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Build the driver config
    pub fn to_pg_config(&self) -> Result<tokio_postgres::Config> {
        if let Some(url) = &self.url {
            return url
                .parse::<tokio_postgres::Config>()
                .map_err(|e| Error::invalid_value("database.url", e.to_string()));
        }

        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.database)
            .user(&self.user)
            .password(&self.password)
            .application_name(crate::NAME);
        Ok(config)
    }

    /// Connection target for logs, without credentials
    pub fn describe(&self) -> String {
        match &self.url {
            Some(_) => "connection url".to_string(),
            None => format!("{}:{}/{}", self.host, self.port, self.database),
        }
    }
}

// ============================================================================
// API
// ============================================================================

/// Breeds API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Breeds endpoint
    pub url: String,
    /// Request timeout in seconds; no timeout when unset
    pub timeout_secs: Option<u64>,
    /// User agent sent with requests
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            timeout_secs: None,
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

// ============================================================================
// Run
// ============================================================================

/// Limits and outputs of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of breeds requested from the API
    #[serde(deserialize_with = "fetch_limit_or_default")]
    pub fetch_limit: u32,
    /// Number of rows written by an export
    #[serde(deserialize_with = "export_count_or_default")]
    pub export_count: u32,
    /// Prefix of the export file name (may include directories)
    pub output_prefix: String,
    /// Country substring counted by a full run
    pub country: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            fetch_limit: RUN_FETCH_LIMIT,
            export_count: DEFAULT_EXPORT_COUNT,
            output_prefix: String::new(),
            country: "United States".to_string(),
        }
    }
}

impl RunConfig {
    /// Override the fetch limit from raw text, falling back on bad input
    pub fn set_fetch_limit(&mut self, raw: &str) {
        self.fetch_limit = limit_from_str("fetch_limit", raw, DEFAULT_FETCH_LIMIT);
    }

    /// Override the export count from raw text, falling back on bad input
    pub fn set_export_count(&mut self, raw: &str) {
        self.export_count = limit_from_str("export_count", raw, DEFAULT_EXPORT_COUNT);
    }
}

// ============================================================================
// Limit coercion
// ============================================================================

/// Resolve a limit value, substituting `default` for anything that is not a
/// non-negative integer.
///
/// A bad value is not an error: a warning is logged and the run goes on.
pub fn limit_or_default(field: &str, value: &serde_yaml::Value, default: u32) -> u32 {
    if let Some(limit) = value.as_u64() {
        if let Ok(limit) = u32::try_from(limit) {
            return limit;
        }
        warn!("{field} is out of range ({limit}). The default value ({default}) has been assigned");
        return default;
    }

    warn!(
        "{field} must be a non-negative integer, not {} ({value:?}). The default value ({default}) has been assigned",
        yaml_type_name(value)
    );
    default
}

/// Resolve a limit given as text (for example a CLI flag)
///
/// Only plain decimal digits are accepted.
pub fn limit_from_str(field: &str, raw: &str, default: u32) -> u32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        warn!("{field} must be a non-negative integer, not {raw:?}. The default value ({default}) has been assigned");
        return default;
    }

    match trimmed.parse::<u32>() {
        Ok(limit) => limit,
        Err(_) => {
            warn!("{field} is out of range ({trimmed}). The default value ({default}) has been assigned");
            default
        }
    }
}

fn yaml_type_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "bool",
        serde_yaml::Value::Number(n) if n.is_f64() => "float",
        serde_yaml::Value::Number(_) => "integer",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged",
    }
}

fn fetch_limit_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u32, D::Error> {
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(limit_or_default("fetch_limit", &value, DEFAULT_FETCH_LIMIT))
}

fn export_count_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u32, D::Error> {
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(limit_or_default("export_count", &value, DEFAULT_EXPORT_COUNT))
}
