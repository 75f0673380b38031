use crate::models::shift::WorkDuration;
use crate::models::time_of_day::TimeOfDay;
use chrono::{NaiveDateTime, TimeDelta};

/// Theoretical end = clock-in + daily work + normalized break, on the nominal day.
///
/// Returned as a timeline point so a sum past midnight lands on the next
/// nominal day instead of wrapping back before the ceiling.
pub fn theoretical_end(
    clock_in: TimeOfDay,
    daily_work: WorkDuration,
    normalized_break: i64,
) -> NaiveDateTime {
    clock_in.on_nominal_day() + TimeDelta::minutes(daily_work.total_minutes() + normalized_break)
}
