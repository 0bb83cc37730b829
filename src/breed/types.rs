//! Breed record types

use super::normalize::normalize_country;
use serde::{Deserialize, Serialize};

/// A breed as returned by the breeds endpoint
///
/// The API sends empty strings for unknown values; absent fields are
/// treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBreed {
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub coat: String,
    #[serde(default)]
    pub pattern: String,
}

/// Response body of the breeds endpoint
///
/// Only `data` is used; pagination links and counters are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct BreedsPage {
    pub data: Vec<RawBreed>,
}

/// A normalized breed record, one row of the breed table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreedRecord {
    pub breed: String,
    pub country: String,
    pub founded_country: String,
    pub origin: String,
    pub coat: String,
    pub pattern: String,
}

impl From<RawBreed> for BreedRecord {
    fn from(raw: RawBreed) -> Self {
        let country = normalize_country(&raw.country);
        Self {
            breed: raw.breed,
            country: country.developed,
            founded_country: country.founded,
            origin: raw.origin,
            coat: raw.coat,
            pattern: raw.pattern,
        }
    }
}

/// A stored breed row, including the serial id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedRow {
    pub id: i32,
    #[serde(flatten)]
    pub record: BreedRecord,
}

impl TryFrom<&tokio_postgres::Row> for BreedRow {
    type Error = tokio_postgres::Error;

    fn try_from(row: &tokio_postgres::Row) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            record: BreedRecord {
                breed: row.try_get("breed")?,
                country: row.try_get("country")?,
                founded_country: row.try_get("founded_country")?,
                origin: row.try_get("origin")?,
                coat: row.try_get("coat")?,
                pattern: row.try_get("pattern")?,
            },
        })
    }
}
