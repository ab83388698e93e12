#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use officelog::core::clock::FixedClock;
use officelog::core::storage::Storage;
use officelog::db::store::MemoryStore;
use tempfile::TempDir;

/// An isolated home directory and database for one CLI test.
pub struct TestEnv {
    pub home: TempDir,
    pub db_path: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("create temp home");
        let db_path = home
            .path()
            .join("officelog_test.sqlite")
            .to_string_lossy()
            .to_string();
        Self { home, db_path }
    }

    /// `officelog --db <tmp>` with HOME pointing at the temp dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("officelog");
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .env_remove("OFFICELOG_LOG")
            .args(["--db", &self.db_path]);
        cmd
    }

    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }
}

/// The display offset used by the library tests (India Standard Time).
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("valid offset")
}

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().expect("valid timestamp")
}

pub fn memory_storage() -> Storage<MemoryStore> {
    Storage::new(MemoryStore::new())
}

pub fn clock_at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> FixedClock {
    FixedClock::new(utc(y, mo, d, h, mi))
}
