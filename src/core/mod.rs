pub mod calculator;
pub mod config;
pub mod logic;

pub use logic::compute_shift;
