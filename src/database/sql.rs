//! SQL text for the breed table
//!
//! Values always travel as bind parameters. Identifiers (table and
//! partition names) and the partition bound in DDL cannot be bound, so they
//! go through `quote_ident` / `quote_literal`.

/// Longest identifier PostgreSQL keeps without truncation (NAMEDATALEN - 1)
pub const MAX_IDENTIFIER_LEN: usize = 63;

/// Children of a partitioned table in the current schema
pub const LIST_PARTITIONS: &str = "
    SELECT child.relname::text AS partition_name
    FROM pg_inherits
    JOIN pg_class parent          ON pg_inherits.inhparent = parent.oid
    JOIN pg_class child           ON pg_inherits.inhrelid  = child.oid
    JOIN pg_namespace nmsp_parent ON nmsp_parent.oid = parent.relnamespace
    WHERE parent.relname::text = $1
      AND nmsp_parent.nspname = current_schema()
    ORDER BY child.relname";

/// Quote an identifier, doubling embedded double quotes
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quote a string literal the way PostgreSQL's `quote_literal` does
pub fn quote_literal(value: &str) -> String {
    let escaped = value.replace('\'', "''");
    if escaped.contains('\\') {
        format!("E'{}'", escaped.replace('\\', "\\\\"))
    } else {
        format!("'{escaped}'")
    }
}

/// Name of the partition holding `country` rows
pub fn partition_name(table: &str, country: &str) -> String {
    format!("{table}_{country}")
}

/// Country served by a partition, derived from its table name
///
/// Strips the `<table>_` prefix; names that do not carry it fall back to
/// the text after the last underscore.
pub fn country_from_partition<'a>(table: &str, partition: &'a str) -> &'a str {
    partition
        .strip_prefix(table)
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or_else(|| partition.rsplit('_').next().unwrap_or(partition))
}

/// List-partitioned breed table
pub fn create_table(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (
            id SERIAL,
            breed TEXT NOT NULL,
            country TEXT NOT NULL,
            founded_country TEXT NOT NULL,
            origin TEXT NOT NULL,
            coat TEXT NOT NULL,
            pattern TEXT NOT NULL,
            PRIMARY KEY (breed, country, origin, pattern)
        ) PARTITION BY LIST (country)",
        quote_ident(table)
    )
}

/// Partition of `table` for one country
pub fn create_partition(table: &str, country: &str) -> String {
    format!(
        "CREATE TABLE {} PARTITION OF {} FOR VALUES IN ({})",
        quote_ident(&partition_name(table, country)),
        quote_ident(table),
        quote_literal(country)
    )
}

/// Bulk insert from six parallel text arrays, skipping key conflicts
pub fn insert_breeds(table: &str) -> String {
    format!(
        "INSERT INTO {} (breed, country, founded_country, origin, coat, pattern)
         SELECT * FROM UNNEST($1::text[], $2::text[], $3::text[], $4::text[], $5::text[], $6::text[])
         ON CONFLICT (breed, country, origin, pattern) DO NOTHING",
        quote_ident(table)
    )
}

/// Rows whose country contains `$1` (literal, case-sensitive)
pub fn count_by_country(table: &str) -> String {
    format!(
        "SELECT count(*) FROM {} WHERE strpos(country, $1) > 0",
        quote_ident(table)
    )
}

/// Up to `$1` rows, all columns, engine order
pub fn select_rows(table: &str) -> String {
    format!(
        "SELECT id, breed, country, founded_country, origin, coat, pattern FROM {} LIMIT $1",
        quote_ident(table)
    )
}
