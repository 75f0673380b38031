mod common;
use common::{setup_test_config, write_test_config};

use rexittime::AppError;
use rexittime::config::{Config, DEFAULT_CEILING};
use std::path::Path;

#[test]
fn test_missing_file_gives_defaults() {
    let path = setup_test_config("cfg_missing");
    let cfg = Config::load_from(Path::new(&path)).unwrap();

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.ceiling, DEFAULT_CEILING);
    assert_eq!(cfg.work_duration().unwrap().total_minutes(), 7 * 60 + 36);
    assert_eq!(cfg.late_exit_hour, 18);
    assert_eq!(cfg.csv_file_name, "slot_straordinario.csv");
}

#[test]
fn test_partial_file_fills_defaults() {
    let path = write_test_config("cfg_partial", "daily_work_hours: 8\n");
    let cfg = Config::load_from(Path::new(&path)).unwrap();

    assert_eq!(cfg.daily_work_hours, 8);
    assert_eq!(cfg.daily_work_minutes, 36);
    assert_eq!(cfg.ceiling_time().unwrap().to_string(), "23:45");
}

#[test]
fn test_out_of_range_values_are_rejected() {
    for (name, yaml) in [
        ("cfg_bad_hours", "daily_work_hours: 25\n"),
        ("cfg_bad_minutes", "daily_work_minutes: 60\n"),
        ("cfg_bad_ceiling", "ceiling: \"24:00\"\n"),
        ("cfg_bad_late", "late_exit_hour: 24\n"),
    ] {
        let path = write_test_config(name, yaml);
        assert!(
            matches!(Config::load_from(Path::new(&path)), Err(AppError::Config(_))),
            "{yaml:?} should be rejected"
        );
    }
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let path = write_test_config("cfg_malformed", "daily_work_hours: [oops\n");
    assert!(matches!(
        Config::load_from(Path::new(&path)),
        Err(AppError::Yaml(_))
    ));
}

#[test]
fn test_init_all_round_trips() {
    let path = setup_test_config("cfg_init_all");
    let written = Config::init_all(Path::new(&path), false).unwrap();
    let loaded = Config::load_from(Path::new(&path)).unwrap();
    assert_eq!(written, loaded);
}
