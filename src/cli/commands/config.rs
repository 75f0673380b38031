use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::load_config;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli.config_file.clone().unwrap_or_else(Config::config_file);

        // ---- EDIT CONFIG ----
        // before --print, so a file that fails validation can still be fixed
        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            let cfg = load_config(cli)?;
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", ConfigLogic::render(&cfg)?);
        }
    }

    Ok(())
}
