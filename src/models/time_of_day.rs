use crate::errors::{AppError, AppResult};
use crate::utils::time;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Wall-clock time with minute resolution and no date component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build from structured input (e.g. a picker). Bounds are still checked.
    pub fn new(hour: u32, minute: u32) -> AppResult<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| AppError::InvalidTimeFormat(format!("{hour:02}:{minute:02}")))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }

    /// Place the time on the shared nominal day used for duration arithmetic.
    pub fn on_nominal_day(&self) -> NaiveDateTime {
        nominal_day().and_time(self.0)
    }

    /// Back from the nominal timeline; the date part is dropped.
    pub fn from_timeline(dt: NaiveDateTime) -> Self {
        let t = dt.time();
        // minute resolution
        Self(t.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(t))
    }
}

/// 2000-01-01, the day every TimeOfDay is anchored to.
pub fn nominal_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self::from_timeline(nominal_day().and_time(t))
    }
}

impl FromStr for TimeOfDay {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        time::parse_time(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(time::TIME_FORMAT))
    }
}
