//! `parcel` table bootstrap.

use crate::db::DbResult;
use rusqlite::Connection;

/// Name of the single table backing `ParcelStore`.
pub const PARCEL_TABLE: &str = "parcel";

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the `parcel` table and its client index if missing.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Returns whether a table with the given name exists.
pub fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
