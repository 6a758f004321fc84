use crate::config::Config;
use crate::errors::AppResult;
use crate::timecard::{EndOutcome, Timecard};
use crate::ui::messages::success;
use crate::utils::time::{format_duration, format_stamp};
use std::path::Path;

pub fn handle(cfg: &Config, repo_dir: &Path) -> AppResult<()> {
    let mut tc = Timecard::load(&cfg.timecard_path(repo_dir))?;

    let EndOutcome::Closed { start, end } = tc.end()?;
    success(format!(
        "Session ended at {} ({}), it will be attributed to your next commit",
        format_stamp(end, cfg),
        format_duration(end - start)
    ));
    Ok(())
}
