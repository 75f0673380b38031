pub mod breaks;
pub mod checkpoints;
pub mod expected;
