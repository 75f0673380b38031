pub mod shift;
pub mod time_of_day;

pub use shift::{Checkpoint, ShiftInput, ShiftResult, WorkDuration};
pub use time_of_day::TimeOfDay;
