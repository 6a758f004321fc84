//! One recorded work session, stored as a single comma-separated line.

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Started, waiting for `end`.
    Pending,
    /// Ended, waiting for the next `start` to attribute a commit.
    Partial,
    /// Commit hash recorded.
    Hashed,
}

impl EntryState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryState::Pending => "pending",
            EntryState::Partial => "partial",
            EntryState::Hashed => "hashed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub start: i64, // seconds since epoch, never 0 once persisted
    pub end: i64,   // 0 while pending
    pub hash: String,
    pub state: EntryState,
}

fn parse_stamp(field: &str, what: &str) -> AppResult<i64> {
    field
        .trim()
        .parse::<i64>()
        .map_err(|e| AppError::Format(format!("invalid {what} time '{field}': {e}")))
}

impl Entry {
    pub fn pending(start: i64) -> Self {
        Self {
            start,
            end: 0,
            hash: String::new(),
            state: EntryState::Pending,
        }
    }

    pub fn marshal(&self) -> AppResult<String> {
        if self.start == 0 {
            return Err(AppError::Format("invalid timecard entry".into()));
        }
        if self.end == 0 {
            return Ok(format!("{},", self.start));
        }
        Ok(format!("{},{},{}", self.start, self.end, self.hash))
    }

    pub fn unmarshal(line: &str) -> AppResult<Self> {
        let fields: Vec<&str> = line.split(',').collect();

        let entry = match fields.as_slice() {
            [start, _] => Self::pending(parse_stamp(start, "start")?),
            [start, end, hash] => {
                let end = parse_stamp(end, "end")?;
                if end == 0 {
                    return Err(AppError::Format(format!(
                        "closed entry without an end time: '{line}'"
                    )));
                }
                let state = if hash.is_empty() {
                    EntryState::Partial
                } else {
                    EntryState::Hashed
                };
                Self {
                    start: parse_stamp(start, "start")?,
                    end,
                    hash: hash.to_string(),
                    state,
                }
            }
            _ => {
                return Err(AppError::Format(format!(
                    "invalid timecard line detected: '{line}'"
                )));
            }
        };

        if entry.start == 0 {
            return Err(AppError::Format(format!(
                "entry without a start time: '{line}'"
            )));
        }
        Ok(entry)
    }

    pub fn is_closed(&self) -> bool {
        self.state != EntryState::Pending
    }

    /// Session length in seconds, once the entry has been ended.
    pub fn duration(&self) -> Option<i64> {
        self.is_closed().then(|| self.end - self.start)
    }
}
