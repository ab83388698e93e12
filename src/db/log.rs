//! Audit trail in the `log` table: one row per state change.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// One audit row as read back for display.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an audit row stamped with the local time.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Local::now().to_rfc3339(), operation, target, message])?;

    tracing::trace!(operation, target, "audit row written");
    Ok(())
}

/// Every audit row, oldest first. RFC 3339 dates are shortened to seconds.
pub fn load_rows(conn: &Connection) -> AppResult<Vec<AuditRow>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id")?;

    let rows = stmt
        .query_map([], |row| {
            let raw: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw);

            Ok(AuditRow {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}
