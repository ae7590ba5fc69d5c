use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        let path = Config::config_file();

        if *init {
            if Config::init()? {
                messages::success(format!("Config file created: {}", path.display()));
            } else {
                messages::warning(format!("Config file already exists: {}", path.display()));
            }
        }

        if *print_config {
            messages::info(format!("Configuration ({}):", path.display()));
            print!("{}", serde_yaml::to_string(cfg)?);
        }
    }

    Ok(())
}
