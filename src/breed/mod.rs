//! Breed records module
//!
//! Data model for the breeds API and the persisted breed table.
//!
//! # Overview
//!
//! - `RawBreed` - One record as served by the breeds endpoint
//! - `BreedRecord` - A normalized record, ready for insertion
//! - `BreedRow` - A stored row, as read back for export
//! - `normalize_country` - Splits "Developed (Founded)" country text

mod normalize;
mod types;

pub use normalize::{normalize_country, CountryName};
pub use types::{BreedRecord, BreedRow, BreedsPage, RawBreed};

#[cfg(test)]
mod tests;
