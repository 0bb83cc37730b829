//! JSON file writer
//!
//! An export is a single JSON array of row objects with every column of
//! the breed table. The file is named after the local date, so a second
//! export on the same day replaces the first.

use crate::breed::BreedRow;
use crate::database::{select_rows, Database};
use crate::error::{Error, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Date format of export file names
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Result of an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// File written
    pub path: PathBuf,
    /// Rows in the file
    pub rows: usize,
}

/// Export file path: the prefix followed by `YYYY-MM-DD.json`
///
/// The prefix is prepended verbatim, so `"out/"` writes into a directory
/// and `"breeds-"` prefixes the file name.
pub fn export_path(prefix: &str, date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("{prefix}{}.json", date.format(EXPORT_DATE_FORMAT)))
}

/// Write `rows` as a JSON array, replacing any existing file
pub fn write_json_rows<T: Serialize>(path: impl AsRef<Path>, rows: &[T]) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        Error::output(format!("Failed to create file {}: {e}", path.display()))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, rows)?;
    writer.flush()?;

    Ok(rows.len())
}

/// Select up to `limit` rows and write them to today's export file
pub async fn export_json(db: &Database, limit: u32, prefix: &str) -> Result<ExportSummary> {
    let rows: Vec<BreedRow> = select_rows(db, limit).await?;
    let path = export_path(prefix, Local::now().date_naive());

    let written = write_json_rows(&path, &rows)?;
    info!("Exported {written} rows to {}", path.display());

    Ok(ExportSummary {
        path,
        rows: written,
    })
}
