mod common;

use chrono::{FixedOffset, NaiveDate};
use common::{ist, utc};
use officelog::config::{Config, migrate};
use officelog::utils::date::{parse_offset, parse_timestamp, today_in};
use std::fs;

#[test]
fn test_parse_offset_variants() {
    assert_eq!(parse_offset("+05:30").unwrap(), ist());
    assert_eq!(parse_offset("+0530").unwrap(), ist());
    assert_eq!(parse_offset("-03").unwrap(), FixedOffset::west_opt(3 * 3600).unwrap());
    assert_eq!(parse_offset("UTC").unwrap(), FixedOffset::east_opt(0).unwrap());
    assert_eq!(parse_offset("Z").unwrap(), FixedOffset::east_opt(0).unwrap());

    for bad in ["05:30", "+5:3", "+05:75", "+ab:cd", "", "+30:00"] {
        assert!(parse_offset(bad).is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn test_today_follows_the_display_offset() {
    // 20:00Z is already the next day in India.
    let now = utc(2024, 1, 1, 20, 0);
    assert_eq!(today_in(now, &ist()), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert_eq!(
        today_in(now, &FixedOffset::east_opt(0).unwrap()),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    );
}

#[test]
fn test_parse_timestamp_formats() {
    let now = utc(2024, 1, 1, 6, 0);
    let offset = ist();

    assert_eq!(parse_timestamp("09:00", now, &offset).unwrap(), utc(2024, 1, 1, 3, 30));
    assert_eq!(
        parse_timestamp("2024-01-01 10:15", now, &offset).unwrap(),
        utc(2024, 1, 1, 4, 45)
    );
    assert_eq!(
        parse_timestamp("2024-01-01T09:00:00Z", now, &offset).unwrap(),
        utc(2024, 1, 1, 9, 0)
    );
    assert!(parse_timestamp("yesterday", now, &offset).is_err());
}

#[test]
fn test_missing_config_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("officelog.conf"));
    assert_eq!(cfg.display_offset, "+05:30");
    assert_eq!(cfg.offset().unwrap(), ist());
}

#[test]
fn test_unparsable_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("officelog.conf");
    fs::write(&path, "database: [unclosed").unwrap();

    let cfg = Config::load_from(&path);
    assert_eq!(cfg.form_entry_field, "160031710");
}

#[test]
fn test_partial_config_keeps_values_and_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("officelog.conf");
    fs::write(&path, "database: /tmp/custom.sqlite\ndisplay_offset: \"+01:00\"\n").unwrap();

    let cfg = Config::load_from(&path);
    assert_eq!(cfg.database, "/tmp/custom.sqlite");
    assert_eq!(cfg.offset().unwrap(), FixedOffset::east_opt(3600).unwrap());
    assert_eq!(cfg.form_comment_field, "1773816160");
}

#[test]
fn test_config_migration_adds_missing_keys_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("officelog.conf");
    fs::write(&path, "database: /tmp/custom.sqlite\nform_entry_field: \"999\"\n").unwrap();

    let missing = migrate::missing_keys(&path).unwrap();
    assert!(missing.contains(&"display_offset".to_string()));
    assert!(!missing.contains(&"database".to_string()));

    let added = migrate::migrate_file(&path).unwrap();
    assert_eq!(added, missing);
    assert!(migrate::missing_keys(&path).unwrap().is_empty());
    assert!(migrate::migrate_file(&path).unwrap().is_empty());

    let cfg = Config::load_from(&path);
    assert_eq!(cfg.database, "/tmp/custom.sqlite");
    assert_eq!(cfg.form_entry_field, "999");
}

#[test]
fn test_config_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("officelog.conf");

    let mut cfg = Config::load_from(&path);
    cfg.display_offset = "-04:00".into();
    cfg.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path), cfg);
}
