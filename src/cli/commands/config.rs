use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, cfg_file: &Path) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        if *init {
            Config::default().save_to(cfg_file)?;
            success(format!("Configuration written to {}", cfg_file.display()));
        }

        if *print_config || !*init {
            info(format!("Configuration file: {}", cfg_file.display()));
            print!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
