//! Breed table creation

use super::connection::Database;
use super::sql;
use crate::error::Result;
use tracing::info;

/// Create the list-partitioned breed table if it does not exist.
///
/// Safe to call on every run. No partitions are created here.
pub async fn init_table(db: &Database) -> Result<()> {
    db.client().batch_execute(&sql::create_table(db.table())).await?;
    info!("Table {} ready", db.table());
    Ok(())
}
