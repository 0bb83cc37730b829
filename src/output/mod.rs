//! Output module
//!
//! Writes breed rows to dated JSON files.
//!
//! # Overview
//!
//! - `export_json` - Select up to N rows and write `<prefix><YYYY-MM-DD>.json`
//! - `export_path` - File name for a prefix and date
//! - `write_json_rows` - Serialize rows to a file, replacing it

mod writer;

pub use writer::{export_json, export_path, write_json_rows, ExportSummary, EXPORT_DATE_FORMAT};
