use rusqlite::{Connection, OptionalExtension, Result};

type MigrationFn = fn(&Connection) -> Result<()>;

/// Ordered list of schema migrations: (version, description, apply).
const MIGRATIONS: &[(&str, &str, MigrationFn)] = &[(
    "20250301_0001_create_kv_store",
    "Created kv table for entry log, todos and settings",
    create_kv_table,
)];

/// Ensure that the `log` table exists with the modern schema.
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

/// Create the key-value table holding one JSON snapshot per logical record.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Idempotent. Returns the versions applied by this call, in order.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }
        apply(conn)?;
        mark_applied(conn, version, message)?;
        tracing::info!(version, "migration applied");
        applied.push(*version);
    }

    Ok(applied)
}
