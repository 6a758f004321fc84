use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::git;
use crate::timecard::Timecard;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// The repository directory must be a git repository. The record file is
/// only created when it does not exist yet, unless `--force` is given.
pub fn handle(cmd: &Commands, cfg: &Config, repo_dir: &Path) -> AppResult<()> {
    let force = matches!(cmd, Commands::Init { force: true });

    if !git::is_git_path(repo_dir) {
        return Err(AppError::NotGitRepo(repo_dir.display().to_string()));
    }

    let path = cfg.timecard_path(repo_dir);
    if path.exists() && !force {
        info(format!(
            "Timecard already set up at {}, use --force to re-initialize.",
            path.display()
        ));
        return Ok(());
    }

    Timecard::init(&path)?;
    success(format!("Initialized new timecard in {}", path.display()));
    Ok(())
}
