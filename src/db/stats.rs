use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(store: &SqliteStore, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED RECORDS
    //
    let entries = store.entries()?;
    println!("{}• Stored records:{}", CYAN, RESET);
    if entries.is_empty() {
        println!("    {GREY}--{RESET}");
    }
    for (key, len, updated_at) in &entries {
        println!(
            "    {GREEN}{:<28}{RESET} {:>6} bytes  {GREY}{}{RESET}",
            key, len, updated_at
        );
    }

    //
    // 3) AUDIT LOG
    //
    let log_rows: i64 = store
        .conn()
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log rows:{} {}{}{}", CYAN, RESET, GREEN, log_rows, RESET);

    let last_migration: Option<String> = store
        .conn()
        .query_row(
            "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    println!(
        "{}• Schema:{} {}",
        CYAN,
        RESET,
        last_migration.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
