//! rExitTime library root.
//! Exposes the time parser, the shift calculator, the CLI parser and run().

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::logic::compute_shift;
pub use errors::{AppError, AppResult};
pub use models::{Checkpoint, ShiftInput, ShiftResult, TimeOfDay, WorkDuration};
pub use utils::time::parse_time;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;

/// Load the config from `--config-file` or the default location.
pub fn load_config(cli: &Cli) -> AppResult<Config> {
    match &cli.config_file {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Central command dispatcher.
///
/// `init` and `config --edit` only need the config path, so a broken file
/// can still be rewritten or edited; the others load it first.
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, &load_config(cli)?),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}
