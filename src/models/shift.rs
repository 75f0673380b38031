use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::TimeOfDay;
use crate::utils::time::{check_work_bounds, parse_work_duration};
use std::str::FromStr;

/// Daily work target (hours 0-24, minutes 0-59).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl WorkDuration {
    pub fn new(hours: u32, minutes: u32) -> AppResult<Self> {
        check_work_bounds(hours, minutes)
            .map(|(hours, minutes)| Self { hours, minutes })
            .ok_or_else(|| AppError::InvalidDuration(format!("{hours}h{minutes:02}m")))
    }

    pub fn total_minutes(&self) -> i64 {
        i64::from(self.hours) * 60 + i64::from(self.minutes)
    }
}

impl FromStr for WorkDuration {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let (hours, minutes) = parse_work_duration(s)?;
        Ok(Self { hours, minutes })
    }
}

/// Everything a single calculation needs.
#[derive(Debug, Clone, Copy)]
pub struct ShiftInput {
    pub clock_in: TimeOfDay,
    pub lunch_out: TimeOfDay,
    pub lunch_in: TimeOfDay,
    pub daily_work: WorkDuration,
    pub ceiling: TimeOfDay,
}

/// An overtime milestone past the theoretical end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub overtime_minutes: i64,
    pub time: TimeOfDay,
}

impl Checkpoint {
    /// Table / CSV label, e.g. `+15 min`.
    pub fn label(&self) -> String {
        format!("+{} min", self.overtime_minutes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftResult {
    pub effective_break: i64,
    pub normalized_break: i64,
    pub theoretical_end: TimeOfDay,
    pub checkpoints: Vec<Checkpoint>,
}
