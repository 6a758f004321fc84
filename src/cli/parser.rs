use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for timecard
#[derive(Parser)]
#[command(
    name = "timecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record work sessions and attribute each one to the commit that followed it",
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// Print the version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Repository directory (defaults to the current working directory)
    #[arg(global = true, long = "repo", value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Override the configuration file location
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Without a command the help text is printed
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty timecard or re-initialize an existing one
    Init {
        #[arg(long = "force", help = "Overwrite an existing timecard")]
        force: bool,
    },

    /// Start or re-start the timecard for the current commit
    Start,

    /// Create a checkpoint within a given interval (not implemented)
    Checkpoint {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// End the running session
    End,

    /// List recorded sessions
    List,

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init { .. } => "init",
            Commands::Start => "start",
            Commands::Checkpoint { .. } => "checkpoint",
            Commands::End => "end",
            Commands::List => "list",
            Commands::Config { .. } => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_repo_after_subcommand() {
        let cli = Cli::try_parse_from(["timecard", "start", "--repo", "/tmp/x"]).unwrap();
        assert_eq!(cli.command.map(|c| c.name()), Some("start"));
        assert_eq!(cli.repo, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn init_accepts_force() {
        let cli = Cli::try_parse_from(["timecard", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));
    }

    #[test]
    fn checkpoint_collects_free_arguments() {
        let cli = Cli::try_parse_from(["timecard", "checkpoint", "wip", "-x"]).unwrap();
        match cli.command {
            Some(Commands::Checkpoint { args }) => assert_eq!(args, vec!["wip", "-x"]),
            _ => panic!("expected checkpoint"),
        }
    }

    #[test]
    fn short_version_flag_is_accepted() {
        let err = Cli::try_parse_from(["timecard", "-v"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn command_is_optional() {
        let cli = Cli::try_parse_from(["timecard"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["timecard", "stop"]).is_err());
    }
}
