//! Engine types
//!
//! Configuration and results of a breed load.

use crate::config::AppConfig;
use serde::Serialize;

/// Configuration for the breed loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Breeds endpoint
    pub url: String,
    /// Value of the `limit` query parameter
    pub fetch_limit: u32,
}

impl LoaderConfig {
    /// Create a loader config
    pub fn new(url: impl Into<String>, fetch_limit: u32) -> Self {
        Self {
            url: url.into(),
            fetch_limit,
        }
    }
}

impl From<&AppConfig> for LoaderConfig {
    fn from(config: &AppConfig) -> Self {
        Self::new(config.api.url.clone(), config.run.fetch_limit)
    }
}

/// Outcome of one `load_breed` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Records returned by the API
    pub fetched: usize,
    /// Rows written to the table
    pub inserted: u64,
    /// Records dropped as duplicates of an existing key
    pub skipped: u64,
    /// Countries whose partitions were created by this load
    pub new_partitions: Vec<String>,
}

impl LoadSummary {
    /// Build a summary, deriving the skip count
    pub fn new(fetched: usize, inserted: u64, new_partitions: Vec<String>) -> Self {
        Self {
            fetched,
            inserted,
            skipped: (fetched as u64).saturating_sub(inserted),
            new_partitions,
        }
    }
}
