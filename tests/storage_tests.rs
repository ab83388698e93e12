mod common;

use chrono::NaiveDate;
use common::{memory_storage, utc};
use officelog::core::storage::{ENTRY_LOG_KEY, SETTINGS_KEY, Storage, TODO_ITEMS_KEY};
use officelog::db::store::{KeyValueStore, MemoryStore, SqliteStore};
use officelog::models::entry_log::EntryLog;
use officelog::models::pending::{PendingSubmission, SubmissionForm};
use officelog::models::settings::AppSettings;
use officelog::models::todo_item::default_todos;

fn sample_log() -> EntryLog {
    EntryLog {
        entry_time: utc(2024, 1, 1, 3, 30),
        exit_time: Some(utc(2024, 1, 1, 11, 45)),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        is_submitted: true,
    }
}

#[test]
fn test_round_trip_in_memory() {
    let mut storage = memory_storage();
    let now = utc(2024, 1, 1, 3, 30);

    let log = sample_log();
    storage.save_entry_log(&log).unwrap();
    assert_eq!(storage.entry_log().unwrap(), Some(log.clone()));

    let todos = default_todos(now);
    storage.save_todo_items(&todos).unwrap();
    assert_eq!(storage.todo_items(now).unwrap(), todos);

    let settings = AppSettings {
        default_work_hours: 7.5,
        exit_calculator_time: "18:30".into(),
    };
    storage.save_settings(&settings).unwrap();
    assert_eq!(storage.settings().unwrap(), settings);

    let pending = PendingSubmission::new(
        log,
        SubmissionForm {
            company_name: "Acme".into(),
            comment: "remote day".into(),
        },
    )
    .with_link("https://forms.example.com/?a=b".into());
    storage.save_pending(&pending).unwrap();
    assert_eq!(storage.pending().unwrap(), Some(pending));
}

#[test]
fn test_round_trip_in_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.sqlite").to_string_lossy().to_string();
    let now = utc(2024, 1, 1, 3, 30);
    let todos = default_todos(now);

    {
        let mut storage = Storage::new(SqliteStore::open(&path).unwrap());
        storage.save_entry_log(&sample_log()).unwrap();
        storage.save_todo_items(&todos).unwrap();
        storage.save_settings(&AppSettings::default()).unwrap();
    }

    let storage = Storage::new(SqliteStore::open(&path).unwrap());
    assert_eq!(storage.entry_log().unwrap(), Some(sample_log()));
    assert_eq!(storage.todo_items(now).unwrap(), todos);
    assert_eq!(storage.settings().unwrap(), AppSettings::default());

    let keys: Vec<String> = storage
        .store()
        .entries()
        .unwrap()
        .into_iter()
        .map(|(k, _, _)| k)
        .collect();
    assert_eq!(keys, [ENTRY_LOG_KEY, SETTINGS_KEY, TODO_ITEMS_KEY]);
}

#[test]
fn test_sqlite_set_overwrites_and_remove_deletes() {
    let mut store = SqliteStore::open(":memory:").unwrap();

    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
    // Removing a missing key is not an error.
    store.remove("k").unwrap();
}

#[test]
fn test_missing_records_fall_back_to_defaults() {
    let storage = memory_storage();
    let now = utc(2024, 1, 1, 3, 30);

    assert_eq!(storage.entry_log().unwrap(), None);
    assert_eq!(storage.pending().unwrap(), None);
    assert_eq!(storage.settings().unwrap(), AppSettings::default());
    assert_eq!(storage.settings().unwrap().default_work_hours, 6.0);
    assert_eq!(storage.todo_items(now).unwrap().len(), 4);
}

#[test]
fn test_corrupt_records_read_as_absent() {
    let mut store = MemoryStore::new();
    store.set(ENTRY_LOG_KEY, "{not json").unwrap();
    store.set(TODO_ITEMS_KEY, "[{\"id\": 1}]").unwrap();
    store.set(SETTINGS_KEY, "42").unwrap();

    let storage = Storage::new(store);
    let now = utc(2024, 1, 1, 3, 30);

    assert_eq!(storage.entry_log().unwrap(), None);
    assert_eq!(storage.todo_items(now).unwrap().len(), 4);
    assert_eq!(storage.settings().unwrap(), AppSettings::default());
}

#[test]
fn test_partial_settings_are_completed_with_defaults() {
    let mut store = MemoryStore::new();
    store.set(SETTINGS_KEY, r#"{"defaultWorkHours": 8}"#).unwrap();

    let storage = Storage::new(store);
    let settings = storage.settings().unwrap();
    assert_eq!(settings.default_work_hours, 8.0);
    assert_eq!(settings.exit_calculator_time, "18:00");
}

#[test]
fn test_entry_log_json_shape() {
    let mut log = sample_log();
    log.exit_time = None;
    log.is_submitted = false;

    let json = serde_json::to_value(&log).unwrap();
    assert_eq!(json["date"], "2024-01-01");
    assert_eq!(json["isSubmitted"], false);
    assert!(json.get("entryTime").is_some());
    assert!(json.get("exitTime").is_none());

    let stored = r#"{"entryTime":"2024-01-01T03:30:00.000Z","date":"2024-01-01"}"#;
    let parsed: EntryLog = serde_json::from_str(stored).unwrap();
    assert_eq!(parsed.entry_time, utc(2024, 1, 1, 3, 30));
    assert!(!parsed.is_submitted);
}

#[test]
fn test_memory_store_basics() {
    let mut store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();
    store.remove("a").unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_settings_validation() {
    let settings = AppSettings::default();
    assert_eq!(settings.with_work_hours(7.5).unwrap().default_work_hours, 7.5);
    assert!(settings.with_work_hours(0.0).is_err());
    assert!(settings.with_work_hours(24.5).is_err());
    assert!(settings.with_work_hours(f64::INFINITY).is_err());
    assert_eq!(
        settings.with_exit_time("7:30").unwrap().exit_calculator_time,
        "07:30"
    );
    assert!(settings.with_exit_time("half past six").is_err());
}

#[test]
fn test_work_hours_keep_full_precision() {
    let hours = [
        15.298408623788905,
        0.1 + 0.2,
        23.999999999999996,
        1.0 / 3.0,
        f64::MIN_POSITIVE,
        24.0,
    ];

    let mut storage = memory_storage();
    for h in hours {
        let settings = AppSettings::default().with_work_hours(h).unwrap();
        storage.save_settings(&settings).unwrap();
        let loaded = storage.settings().unwrap();
        assert_eq!(loaded, settings, "work hours {h:?} changed on reload");
        assert_eq!(loaded.default_work_hours.to_bits(), h.to_bits());
    }
}

#[test]
fn test_work_hours_sweep_reads_back_bit_exact() {
    let mut storage = memory_storage();
    // Walk (0, 24] with an irrational step so most values need 17 digits.
    let step = 24.0 / (5000.0 + std::f64::consts::PI);
    let mut h = step;
    while h <= 24.0 {
        let settings = AppSettings::default().with_work_hours(h).unwrap();
        storage.save_settings(&settings).unwrap();
        assert_eq!(
            storage.settings().unwrap().default_work_hours.to_bits(),
            h.to_bits(),
            "work hours {h:?} changed on reload"
        );
        h += step;
    }
}
