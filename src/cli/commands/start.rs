use crate::config::Config;
use crate::errors::AppResult;
use crate::git::LazyRepo;
use crate::timecard::{StartOutcome, Timecard};
use crate::ui::messages::{info, success, warning};
use crate::utils::time::format_stamp;
use std::path::Path;

pub fn handle(cfg: &Config, repo_dir: &Path) -> AppResult<()> {
    let repo = LazyRepo::new(repo_dir);
    let mut tc = Timecard::load(&cfg.timecard_path(repo_dir))?;

    if tc.skipped_lines() > 0 {
        warning(format!(
            "Ignored {} unreadable line(s) in {}",
            tc.skipped_lines(),
            tc.path().display()
        ));
    }

    match tc.start(&repo)? {
        StartOutcome::Opened { start } => {
            success(format!("Session started at {}", format_stamp(start, cfg)));
        }
        StartOutcome::Restarted { previous, start } => {
            info(format!(
                "Session restarted at {} (was {})",
                format_stamp(start, cfg),
                format_stamp(previous, cfg)
            ));
        }
        StartOutcome::Attributed { hash, start } => {
            info(format!(
                "Previous session attributed to {}",
                crate::utils::short_hash(&hash, cfg.hash_length)
            ));
            success(format!("Session started at {}", format_stamp(start, cfg)));
        }
    }
    Ok(())
}
