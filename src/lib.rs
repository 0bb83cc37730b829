//! # breed-loader
//!
//! Fetches cat-breed records from an HTTP API, normalizes their country
//! text, stores them in a PostgreSQL table list-partitioned by country, and
//! exports bounded samples to dated JSON files.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use breed_loader::config::AppConfig;
//! use breed_loader::database::{count_by_country, init_table, Database};
//! use breed_loader::engine::BreedLoader;
//! use breed_loader::output::export_json;
//!
//! #[tokio::main]
//! async fn main() -> breed_loader::Result<()> {
//!     let config = AppConfig::load(None)?;
//!     let mut db = Database::connect(&config.database).await?;
//!
//!     init_table(&db).await?;
//!     BreedLoader::from_config(&config)?.load_breed(&mut db).await?;
//!     println!("{}", count_by_country(&db, "United States").await?);
//!     export_json(&db, config.run.export_count, "").await?;
//!
//!     db.close().await
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌─────────────┐   ┌──────────────────────────────┐
//! │  http      │──▶│  breed      │──▶│  database                    │
//! │  GET limit │   │  normalize  │   │  init_table / partitions /   │
//! └────────────┘   └─────────────┘   │  insert / count / select     │
//!        ▲                           └──────────────┬───────────────┘
//!        │            engine::BreedLoader           │
//!        └──────────────────────────────────────────┤
//!                                                   ▼
//!                                    output::export_json (YYYY-MM-DD.json)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Run configuration
pub mod config;

/// Breed records and country normalization
pub mod breed;

/// HTTP client for the breeds API
pub mod http;

/// PostgreSQL connection, schema, partitions and queries
pub mod database;

/// Breed loading engine
pub mod engine;

/// JSON export
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
