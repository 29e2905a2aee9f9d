//! Durable storage of the attendance snapshot.

use crate::core::attendance::{Snapshot, SnapshotRecord};
use crate::errors::AppResult;
use crate::models::SeatKey;
use rusqlite::{Connection, params};

/// Replace the stored snapshot with `snapshot`, atomically.
pub fn save(conn: &mut Connection, snapshot: &Snapshot) -> AppResult<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM snapshot", [])?;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO snapshot (position, section, seat, absent, on_leave)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for (pos, rec) in snapshot.records.iter().enumerate() {
            stmt.execute(params![
                pos as i64,
                rec.key.section,
                rec.key.seat,
                rec.absent,
                rec.on_leave
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

/// Stored snapshot in saved order, or `None` when nothing was ever saved.
pub fn load(conn: &Connection) -> AppResult<Option<Snapshot>> {
    let mut stmt = conn.prepare_cached(
        "SELECT section, seat, absent, on_leave FROM snapshot ORDER BY position ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(SnapshotRecord {
            key: SeatKey::new(row.get(0)?, row.get(1)?),
            absent: row.get(2)?,
            on_leave: row.get(3)?,
        })
    })?;

    let mut records = Vec::new();
    for r in rows {
        records.push(r?);
    }

    if records.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Snapshot { records }))
    }
}
