//! Idempotent schema bootstrap.
//!
//! # Invariants
//! - Running `ensure_schema` on an initialized database is a no-op.
//! - Existing rows are never touched.

use super::DbResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the `jdm_parts` table when it does not exist yet.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_schema;
    use rusqlite::Connection;

    #[test]
    fn ensure_schema_is_idempotent_and_keeps_rows() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO jdm_parts (name, car_model) VALUES ('Recaro Seats', 'Mazda RX-7');",
            [],
        )
        .unwrap();

        ensure_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM jdm_parts;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
