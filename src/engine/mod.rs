//! Breed loading engine
//!
//! One fetch/normalize/insert cycle.
//!
//! # Overview
//!
//! `BreedLoader::load_breed` runs the steps in order:
//! 1. GET the breeds endpoint with `limit=<fetch_limit>`
//! 2. Normalize each record's country text
//! 3. Create partitions for countries not yet registered
//! 4. Bulk-insert with conflict skip, committed once

mod types;

pub use types::{LoadSummary, LoaderConfig};

use crate::breed::{BreedRecord, BreedsPage, RawBreed};
use crate::config::AppConfig;
use crate::database::{ensure_partitions, insert_records, Database};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Fetches breeds from the API and stores them
pub struct BreedLoader {
    /// HTTP client
    client: HttpClient,
    /// Loader configuration
    config: LoaderConfig,
}

impl BreedLoader {
    /// Create a new loader
    pub fn new(client: HttpClient, config: LoaderConfig) -> Self {
        Self { client, config }
    }

    /// Create a loader from the run configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = HttpClient::with_config(HttpClientConfig::from_api(&config.api))?;
        Ok(Self::new(client, LoaderConfig::from(config)))
    }

    /// Get the loader configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Fetch one page of raw breeds
    pub async fn fetch(&self) -> Result<Vec<RawBreed>> {
        let request = RequestConfig::new().query("limit", self.config.fetch_limit);
        let page: BreedsPage = self
            .client
            .get_json_with_config(&self.config.url, request)
            .await?;

        debug!("Fetched {} breeds from {}", page.data.len(), self.config.url);
        Ok(page.data)
    }

    /// Fetch, normalize, partition and insert
    pub async fn load_breed(&self, db: &mut Database) -> Result<LoadSummary> {
        let records = normalize(self.fetch().await?);

        let new_partitions = ensure_partitions(db, batch_countries(&records)).await?;
        let inserted = insert_records(db, &records).await?;

        let summary = LoadSummary::new(records.len(), inserted, new_partitions);
        info!(
            "Loaded {} breeds: {} inserted, {} skipped, {} new partitions",
            summary.fetched,
            summary.inserted,
            summary.skipped,
            summary.new_partitions.len()
        );
        Ok(summary)
    }
}

impl std::fmt::Debug for BreedLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreedLoader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Normalize the country fields of a fetched batch
pub fn normalize(raw: Vec<RawBreed>) -> Vec<BreedRecord> {
    raw.into_iter().map(BreedRecord::from).collect()
}

/// Distinct countries of a batch, sorted
pub fn batch_countries(records: &[BreedRecord]) -> BTreeSet<&str> {
    records.iter().map(|r| r.country.as_str()).collect()
}
