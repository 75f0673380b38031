//! Overtime checkpoints, 15 minutes apart, bounded by a ceiling.

use crate::models::shift::Checkpoint;
use crate::models::time_of_day::TimeOfDay;
use chrono::{NaiveDateTime, TimeDelta};

pub const SLOT_MINUTES: i64 = 15;

/// Lazy sequence of checkpoints after `end`.
///
/// Each step checks the candidate against the ceiling; the first candidate
/// strictly past it ends the sequence. A candidate equal to the ceiling is kept.
#[derive(Debug, Clone)]
pub struct Checkpoints {
    end: NaiveDateTime,
    ceiling: NaiveDateTime,
    k: i64,
    done: bool,
}

impl Checkpoints {
    pub fn new(end: NaiveDateTime, ceiling: NaiveDateTime) -> Self {
        Self {
            end,
            ceiling,
            k: 0,
            done: false,
        }
    }
}

impl Iterator for Checkpoints {
    type Item = Checkpoint;

    fn next(&mut self) -> Option<Checkpoint> {
        if self.done {
            return None;
        }

        let k = self.k + 1;
        let overtime = SLOT_MINUTES * k;
        let candidate = self.end + TimeDelta::minutes(overtime);

        if candidate > self.ceiling {
            self.done = true;
            return None;
        }

        self.k = k;
        Some(Checkpoint {
            overtime_minutes: overtime,
            time: TimeOfDay::from_timeline(candidate),
        })
    }
}

impl std::iter::FusedIterator for Checkpoints {}
