use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rExitTime
#[derive(Parser)]
#[command(
    name = "rexittime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute the theoretical end of the workday and the overtime slots after it",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the default configuration file
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Compute theoretical end time and overtime slots
    Calc {
        /// Clock-in time (HH:MM)
        #[arg(value_name = "IN")]
        clock_in: String,

        /// Lunch-out time (HH:MM)
        #[arg(value_name = "LUNCH_OUT")]
        lunch_out: String,

        /// Lunch-in time (HH:MM)
        #[arg(value_name = "LUNCH_IN")]
        lunch_in: String,

        #[arg(
            long = "work",
            conflicts_with_all = ["hours", "minutes"],
            help = "Daily work duration, e.g. 7h36m, 8h, 7:36"
        )]
        work: Option<String>,

        #[arg(long = "hours", help = "Daily work hours (0-24)")]
        hours: Option<u32>,

        #[arg(long = "minutes", help = "Daily work minutes (0-59)")]
        minutes: Option<u32>,

        #[arg(long = "ceiling", help = "Latest slot time (HH:MM), default 23:45")]
        ceiling: Option<String>,

        #[arg(
            long = "export",
            value_name = "FILE",
            num_args = 0..=1,
            help = "Export the slots (default file name from config)"
        )]
        export: Option<Option<PathBuf>>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'f', help = "Overwrite the export file without asking")]
        force: bool,
    },
}
