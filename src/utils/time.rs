//! Time utilities: epoch stamps to local wall-clock text, durations.

use crate::config::Config;
use chrono::{Local, TimeZone};

/// Render an epoch stamp in local time using the configured format.
pub fn format_stamp(ts: i64, cfg: &Config) -> String {
    match Local.timestamp_opt(ts, 0).single() {
        Some(dt) => dt.format(&cfg.time_format).to_string(),
        None => ts.to_string(),
    }
}

pub fn format_duration(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let m = secs.abs() / 60;
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}
