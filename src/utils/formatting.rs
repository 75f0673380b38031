//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `45` → `45 min`
pub fn minutes_label(mins: i64) -> String {
    format!("{} min", mins)
}

/// `456` → `07h 36m`
pub fn mins2readable(mins: i64) -> String {
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}
