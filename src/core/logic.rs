use crate::core::calculator::breaks::{effective_break, normalize_break};
use crate::core::calculator::checkpoints::Checkpoints;
use crate::core::calculator::expected::theoretical_end;
use crate::errors::AppResult;
use crate::models::shift::{ShiftInput, ShiftResult};
use crate::models::time_of_day::TimeOfDay;

pub struct Core;

impl Core {
    /// Break → normalized break → theoretical end → checkpoints up to the ceiling.
    pub fn compute_shift(input: &ShiftInput) -> AppResult<ShiftResult> {
        let effective = effective_break(input.lunch_out, input.lunch_in)?;
        let normalized = normalize_break(effective);
        let end = theoretical_end(input.clock_in, input.daily_work, normalized);

        let checkpoints = Checkpoints::new(end, input.ceiling.on_nominal_day()).collect();

        Ok(ShiftResult {
            effective_break: effective,
            normalized_break: normalized,
            theoretical_end: TimeOfDay::from_timeline(end),
            checkpoints,
        })
    }
}

/// Shorthand for [`Core::compute_shift`].
pub fn compute_shift(input: &ShiftInput) -> AppResult<ShiftResult> {
    Core::compute_shift(input)
}
