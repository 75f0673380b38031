/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Theoretical end color:
/// hour ≥ late threshold → red
/// one hour before the threshold → yellow
/// otherwise → green
pub fn color_for_end_hour(hour: u32, late_exit_hour: u32) -> &'static str {
    if hour >= late_exit_hour {
        RED
    } else if hour + 1 >= late_exit_hour {
        YELLOW
    } else {
        GREEN
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
