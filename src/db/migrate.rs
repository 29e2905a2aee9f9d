use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `snapshot` table: one row per tracked seat, `position` keeps
/// the saved order.
fn create_snapshot_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS snapshot (
            position  INTEGER PRIMARY KEY,
            section   INTEGER NOT NULL,
            seat      INTEGER NOT NULL CHECK(seat > 0),
            absent    INTEGER NOT NULL DEFAULT 0 CHECK(absent IN (0,1)),
            on_leave  INTEGER NOT NULL DEFAULT 0 CHECK(on_leave IN (0,1))
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_snapshot_key ON snapshot(section, seat);
        "#,
    )?;
    Ok(())
}

fn log_migration(conn: &Connection, target: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [target, message],
    )?;
    Ok(())
}

/// Bring the schema up to date. Safe to call on every open.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "snapshot")? {
        create_snapshot_table(conn)?;
        log_migration(conn, "snapshot", "Created snapshot table")?;
        success("Created snapshot table.");
    }

    Ok(())
}
