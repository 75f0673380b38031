//! Time utilities: parsing HH:MM, duration computations, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::TimeOfDay;
use chrono::{NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

pub const TIME_FORMAT: &str = "%H:%M";

/// Two-digit hour 00-23, colon, two-digit minute 00-59. Nothing else.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));

/// Parse a literal wall-clock `HH:MM` string (surrounding whitespace is ignored).
pub fn parse_time(raw: &str) -> AppResult<TimeOfDay> {
    let s = raw.trim();
    if !TIME_RE.is_match(s) {
        return Err(AppError::InvalidTimeFormat(s.to_string()));
    }

    let t = NaiveTime::parse_from_str(s, TIME_FORMAT)
        .map_err(|_| AppError::InvalidTimeFormat(s.to_string()))?;
    Ok(TimeOfDay::from(t))
}

/// Whole minutes from `start` to `end`, truncated toward zero. Negative if `end < start`.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}

/// `7h36m`, `7h`, `36m`
static WORK_HM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([0-9]{1,2})h)?(?:([0-9]{1,2})m)?$").expect("valid duration regex")
});

/// `7:36`
static WORK_CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("valid duration regex"));

/// Parse a daily work duration into (hours, minutes).
///
/// Accepted forms: `7h36m`, `7h`, `36m`, `7:36`.
pub fn parse_work_duration(raw: &str) -> AppResult<(u32, u32)> {
    let s = raw.trim().to_ascii_lowercase();
    let invalid = || AppError::InvalidDuration(raw.trim().to_string());

    let caps = WORK_CLOCK_RE
        .captures(&s)
        .or_else(|| WORK_HM_RE.captures(&s))
        .ok_or_else(invalid)?;

    if caps.get(1).is_none() && caps.get(2).is_none() {
        return Err(invalid());
    }

    let part = |i: usize| -> AppResult<u32> {
        match caps.get(i) {
            Some(m) => m.as_str().parse::<u32>().map_err(|_| invalid()),
            None => Ok(0),
        }
    };

    check_work_bounds(part(1)?, part(2)?).ok_or_else(invalid)
}

/// Hours 0-24, minutes 0-59, never more than a full day.
pub fn check_work_bounds(hours: u32, minutes: u32) -> Option<(u32, u32)> {
    if hours > 24 || minutes > 59 || (hours == 24 && minutes > 0) {
        None
    } else {
        Some((hours, minutes))
    }
}
