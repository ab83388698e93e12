use crate::cli::commands::{audit, open_storage};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::storage::Storage;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

fn migrate(db_path: &str) -> AppResult<()> {
    // Run on a bare connection: opening the store would apply them silently.
    let pool = DbPool::new(db_path)?;
    let applied = run_pending_migrations(&pool.conn)?;

    if applied.is_empty() {
        info("Database schema is up to date.");
    }
    for version in applied {
        success(format!("Migration applied: {}", version));
    }
    Ok(())
}

fn check(storage: &Storage<SqliteStore>) -> AppResult<()> {
    let result: String = storage
        .store()
        .conn()
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if result == "ok" {
        success("Integrity check passed.");
    } else {
        error(format!("Integrity check failed: {}", result));
    }
    Ok(())
}

fn vacuum(storage: &Storage<SqliteStore>) -> AppResult<()> {
    storage.store().conn().execute_batch("VACUUM;")?;
    audit(storage, "vacuum", "", "Database compacted");
    success("Vacuum completed.");
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate: do_migrate,
        check: do_check,
        vacuum: do_vacuum,
        info: do_info,
    } = cmd
    else {
        return Ok(());
    };

    if *do_migrate {
        migrate(&cfg.database)?;
    }

    let storage = open_storage(cfg)?;

    if *do_info {
        stats::print_db_info(storage.store(), &cfg.database)?;
    }
    if *do_check {
        check(&storage)?;
    }
    if *do_vacuum {
        vacuum(&storage)?;
    }

    Ok(())
}
