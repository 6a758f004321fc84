use crate::config::Config;
use crate::errors::AppResult;
use crate::timecard::{Entry, EntryState, Timecard};
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::colour_for_state;
use crate::utils::formatting::pad_right;
use crate::utils::short_hash;
use crate::utils::time::{format_duration, format_stamp};
use std::path::Path;

pub fn handle(cfg: &Config, repo_dir: &Path) -> AppResult<()> {
    let tc = Timecard::load(&cfg.timecard_path(repo_dir))?;

    if tc.skipped_lines() > 0 {
        warning(format!(
            "Ignored {} unreadable line(s) in {}",
            tc.skipped_lines(),
            tc.path().display()
        ));
    }

    header(format!(
        "{} (format {})",
        tc.path().display(),
        tc.header().format_version()
    ));

    if tc.entries().is_empty() {
        info("No sessions recorded yet.");
        return Ok(());
    }

    let mut total = 0;
    for (idx, entry) in tc.entries().iter().enumerate() {
        println!("{:>4}  {}", idx + 1, render_row(entry, cfg));
        total += entry.duration().unwrap_or(0);
    }

    println!();
    info(format!("Total recorded time: {}", format_duration(total)));
    Ok(())
}

fn render_row(entry: &Entry, cfg: &Config) -> String {
    let end = match entry.state {
        EntryState::Pending => "--".to_string(),
        _ => format_stamp(entry.end, cfg),
    };
    let duration = entry
        .duration()
        .map(format_duration)
        .unwrap_or_else(|| "--".to_string());
    let state = colour_for_state(entry.state).paint(pad_right(entry.state.as_str(), 8));

    format!(
        "{}  {}  {}  {}  {}",
        pad_right(&format_stamp(entry.start, cfg), 16),
        pad_right(&end, 16),
        pad_right(&duration, 8),
        state,
        short_hash(&entry.hash, cfg.hash_length)
    )
}
