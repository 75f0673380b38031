#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rexittime::{ShiftInput, TimeOfDay, WorkDuration, parse_time};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rxt() -> Command {
    cargo_bin_cmd!("rexittime")
}

/// Unique config path inside the system temp dir; any existing file is removed,
/// so the binary runs with the built-in defaults.
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rexittime.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Same as `setup_test_config` but with the given YAML written to it.
pub fn write_test_config(name: &str, yaml: &str) -> String {
    let cfg_path = setup_test_config(name);
    fs::write(&cfg_path, yaml).expect("write test config");
    cfg_path
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn t(s: &str) -> TimeOfDay {
    parse_time(s).expect("valid test time")
}

/// Input with the default 7h36m work day.
pub fn shift(clock_in: &str, lunch_out: &str, lunch_in: &str, ceiling: &str) -> ShiftInput {
    ShiftInput {
        clock_in: t(clock_in),
        lunch_out: t(lunch_out),
        lunch_in: t(lunch_in),
        daily_work: WorkDuration::new(7, 36).expect("valid work duration"),
        ceiling: t(ceiling),
    }
}
