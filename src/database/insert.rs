//! Bulk insert of breed records

use super::connection::Database;
use super::sql;
use crate::breed::BreedRecord;
use crate::error::Result;
use tracing::debug;

/// Insert `records` in one statement and one transaction.
///
/// Rows whose (breed, country, origin, pattern) already exists, in the
/// table or earlier in the batch, are skipped. Returns the number of rows
/// actually inserted. Every country must already have a partition.
pub async fn insert_records(db: &mut Database, records: &[BreedRecord]) -> Result<u64> {
    let mut breeds = Vec::with_capacity(records.len());
    let mut countries = Vec::with_capacity(records.len());
    let mut founded = Vec::with_capacity(records.len());
    let mut origins = Vec::with_capacity(records.len());
    let mut coats = Vec::with_capacity(records.len());
    let mut patterns = Vec::with_capacity(records.len());

    for record in records {
        breeds.push(record.breed.as_str());
        countries.push(record.country.as_str());
        founded.push(record.founded_country.as_str());
        origins.push(record.origin.as_str());
        coats.push(record.coat.as_str());
        patterns.push(record.pattern.as_str());
    }

    let statement = sql::insert_breeds(db.table());
    let tx = db.client_mut().transaction().await?;
    let inserted = tx
        .execute(
            &statement,
            &[&breeds, &countries, &founded, &origins, &coats, &patterns],
        )
        .await?;
    tx.commit().await?;

    debug!("Inserted {inserted} of {} records", records.len());
    Ok(inserted)
}
