use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli.config_file.clone().unwrap_or_else(Config::config_file);

    println!("⚙️  Initializing rExitTime…");
    Config::init_all(&path, cli.test)?;
    println!("📄 Config file : {}", path.display());

    success("rExitTime initialization completed!");
    Ok(())
}
