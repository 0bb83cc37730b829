//! Per-country partition registry
//!
//! Partitions are named `<table>_<country>` and are created lazily, once,
//! before the first row for a country is inserted. They are never dropped.

use super::connection::Database;
use super::sql;
use crate::error::{Error, Result};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Countries that already have a partition of the breed table
pub async fn list_partitions(db: &Database) -> Result<BTreeSet<String>> {
    let table = db.table();
    let rows = db.client().query(sql::LIST_PARTITIONS, &[&table]).await?;

    let mut countries = BTreeSet::new();
    for row in rows {
        let name: String = row.try_get(0)?;
        countries.insert(sql::country_from_partition(table, &name).to_string());
    }

    debug!("Found {} partitions of {}", countries.len(), table);
    Ok(countries)
}

/// Create the partition for one country.
///
/// Does not check whether the partition exists; creating it twice fails.
pub async fn create_partition(db: &Database, country: &str) -> Result<()> {
    let name = sql::partition_name(db.table(), country);
    if name.len() > sql::MAX_IDENTIFIER_LEN {
        return Err(Error::partition(
            country,
            format!(
                "partition name '{name}' exceeds {} bytes",
                sql::MAX_IDENTIFIER_LEN
            ),
        ));
    }

    db.client()
        .batch_execute(&sql::create_partition(db.table(), country))
        .await?;

    info!("Created partition {name}");
    Ok(())
}

/// Create partitions for the countries in `countries` that have none yet.
///
/// Returns the countries whose partitions were created, in sorted order.
pub async fn ensure_partitions<'a, I>(db: &Database, countries: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let existing = list_partitions(db).await?;
    let missing: BTreeSet<&str> = countries
        .into_iter()
        .filter(|country| !existing.contains(*country))
        .collect();

    let mut created = Vec::with_capacity(missing.len());
    for country in missing {
        create_partition(db, country).await?;
        created.push(country.to_string());
    }

    Ok(created)
}
