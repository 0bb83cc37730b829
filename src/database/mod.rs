//! PostgreSQL storage for breed records
//!
//! This module owns the single connection of a run and everything issued
//! over it: table creation, the per-country partition registry, and the
//! read queries.
//!
//! # Overview
//!
//! - `Database` / `with_database` - Connection lifecycle
//! - `init_table` - Idempotent creation of the list-partitioned table
//! - `list_partitions` / `create_partition` / `ensure_partitions` - Registry
//! - `insert_records` - Conflict-skipping bulk insert
//! - `count_by_country` / `select_rows` - Queries

mod connection;
mod insert;
mod partition;
mod query;
mod schema;
pub mod sql;

pub use connection::{with_database, Database, DatabaseFuture};
pub use insert::insert_records;
pub use partition::{create_partition, ensure_partitions, list_partitions};
pub use query::{count_by_country, select_rows};
pub use schema::init_table;
