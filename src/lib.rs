//! timecard library root.
//! Exposes the record format, the session state machine, the CLI parser and
//! the high-level run() function.

pub mod cli;
pub mod config;
pub mod errors;
pub mod git;
pub mod timecard;
pub mod ui;
pub mod utils;

use clap::{CommandFactory, Parser};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppResult, CommandFailure};
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cmd: &Commands, cfg: &Config, cfg_file: &Path, repo_dir: &Path) -> AppResult<()> {
    match cmd {
        Commands::Init { .. } => cli::commands::init::handle(cmd, cfg, repo_dir),
        Commands::Start => cli::commands::start::handle(cfg, repo_dir),
        Commands::Checkpoint { .. } => cli::commands::checkpoint::handle(cmd),
        Commands::End => cli::commands::end::handle(cfg, repo_dir),
        Commands::List => cli::commands::list::handle(cfg, repo_dir),
        Commands::Config { .. } => cli::commands::config::handle(cmd, cfg, cfg_file),
    }
}

/// Entry point used by main.rs
pub fn run() -> Result<(), CommandFailure> {
    let cli = Cli::parse();
    let Some(cmd) = &cli.command else {
        // Usage is not an error.
        let _ = Cli::command().print_help();
        println!();
        return Ok(());
    };
    let command = cmd.name();

    let prepare = || -> AppResult<()> {
        let cfg_file = cli.config.clone().unwrap_or_else(Config::config_file);
        let cfg = Config::load_from(&cfg_file)?;
        let repo_dir = match &cli.repo {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        dispatch(cmd, &cfg, &cfg_file, &repo_dir)
    };

    prepare().map_err(|source| CommandFailure { command, source })
}

pub use crate::timecard::{Entry, EntryState, Header, Timecard};
