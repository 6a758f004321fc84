use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Checkpoints inside a session are not recorded yet; the timecard file is
/// left untouched.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Checkpoint { args } = cmd {
        warning(format!(
            "checkpoint is not implemented, ignoring {:?}",
            args
        ));
    }
    Ok(())
}
