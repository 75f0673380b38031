//! Lunch break measurement and bucketing.

use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::TimeOfDay;
use crate::utils::time::minutes_between;

/// Minutes between lunch-out and lunch-in. Fails when lunch-in comes first.
pub fn effective_break(lunch_out: TimeOfDay, lunch_in: TimeOfDay) -> AppResult<i64> {
    let mins = minutes_between(lunch_out.on_nominal_day(), lunch_in.on_nominal_day());
    if mins < 0 {
        return Err(AppError::NegativeBreak);
    }
    Ok(mins)
}

/// Snap a break to the 45 / 60 / 75 minute buckets (upper bound inclusive).
///
/// Breaks longer than 75 minutes are capped at 75, they are not extended.
pub fn normalize_break(minutes: i64) -> i64 {
    match minutes {
        m if m <= 45 => 45,
        m if m <= 60 => 60,
        _ => 75,
    }
}
