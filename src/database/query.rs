//! Read queries over the breed table

use super::connection::Database;
use super::sql;
use crate::breed::BreedRow;
use crate::error::Result;
use tracing::debug;

/// Number of rows whose country contains `substring` (case-sensitive)
pub async fn count_by_country(db: &Database, substring: &str) -> Result<i64> {
    let row = db
        .client()
        .query_one(&sql::count_by_country(db.table()), &[&substring])
        .await?;
    let count: i64 = row.try_get(0)?;

    debug!("{count} rows with country matching '{substring}'");
    Ok(count)
}

/// Up to `limit` rows in whatever order the engine returns them
pub async fn select_rows(db: &Database, limit: u32) -> Result<Vec<BreedRow>> {
    let limit = i64::from(limit);
    let rows = db
        .client()
        .query(&sql::select_rows(db.table()), &[&limit])
        .await?;

    let mut results = Vec::with_capacity(rows.len());
    for row in &rows {
        results.push(BreedRow::try_from(row)?);
    }
    Ok(results)
}
