//! In-memory representation of the `.timecard` file and its session
//! state machine.
//!
//! The file is the only state: every mutation is applied in memory and then
//! the whole file is rewritten. Hash resolution for an ended session is
//! deferred to the next `start`, so each session is attributed to the commit
//! produced after the work rather than the one it started from.

pub mod entry;
pub mod header;

pub use entry::{Entry, EntryState};
pub use header::{FormatVersion, Header};

use crate::errors::{AppError, AppResult};
use crate::git::HashProvider;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// What `start` did to the timecard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new pending entry was appended.
    Opened { start: i64 },
    /// The pending entry was re-stamped instead of opening a new one.
    Restarted { previous: i64, start: i64 },
    /// The ended entry got `hash` and a new pending entry was appended.
    Attributed { hash: String, start: i64 },
}

/// What `end` did to the timecard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndOutcome {
    Closed { start: i64, end: i64 },
}

#[derive(Debug)]
pub struct Timecard {
    path: PathBuf,
    header: Header,
    entries: Vec<Entry>,
    skipped: usize,
}

fn now() -> i64 {
    Utc::now().timestamp()
}

impl Timecard {
    /// Create an empty timecard and write it to `path` right away.
    pub fn init(path: &Path) -> AppResult<Self> {
        let tc = Self {
            path: path.to_path_buf(),
            header: Header::new(),
            entries: Vec::new(),
            skipped: 0,
        };
        tc.flush()?;
        Ok(tc)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let blob = fs::read_to_string(path)?;
        let mut tc = Self {
            path: path.to_path_buf(),
            header: Header::new(),
            entries: Vec::new(),
            skipped: 0,
        };
        tc.unmarshal(&blob)?;
        Ok(tc)
    }

    /// Replace header and entries with the content of `blob`.
    ///
    /// A bad header is an error. Entry lines that do not decode are dropped
    /// and counted in [`Timecard::skipped_lines`]; blank lines are ignored.
    pub fn unmarshal(&mut self, blob: &str) -> AppResult<()> {
        let mut lines = blob.split('\n');
        let header_line = lines.next().unwrap_or_default();
        let header = Header::unmarshal(header_line.trim_end_matches('\r'))?;

        let mut entries = Vec::new();
        let mut skipped = 0;
        for line in lines.map(|l| l.trim_end_matches('\r')) {
            match Entry::unmarshal(line) {
                Ok(e) => entries.push(e),
                Err(_) if line.trim().is_empty() => {}
                Err(_) => skipped += 1,
            }
        }

        self.header = header;
        self.entries = entries;
        self.skipped = skipped;
        Ok(())
    }

    /// Header line followed by one line per entry, without trailing newline.
    pub fn marshal(&self) -> AppResult<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(self.header.marshal());
        for entry in &self.entries {
            lines.push(entry.marshal()?);
        }
        Ok(lines.join("\n"))
    }

    /// Rewrite the whole file. The content goes to a sibling file first and
    /// is renamed over the target.
    pub fn flush(&self) -> AppResult<()> {
        let mut contents = self.marshal()?;
        contents.push('\n');

        let tmp_name = match self.path.file_name() {
            Some(name) => format!("{}.tmp", name.to_string_lossy()),
            None => ".timecard.tmp".to_string(),
        };
        let tmp = self.path.with_file_name(tmp_name);

        fs::write(&tmp, contents)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// `header.count` must match the entries held before any mutation.
    pub fn check_invariant(&self) -> AppResult<()> {
        if self.header.count as usize != self.entries.len() {
            return Err(AppError::Invariant {
                stored: self.header.count,
                actual: self.entries.len(),
            });
        }
        Ok(())
    }

    pub fn start(&mut self, git: &dyn HashProvider) -> AppResult<StartOutcome> {
        self.start_at(git, now())
    }

    /// Start or restart a session at `now`.
    pub fn start_at(&mut self, git: &dyn HashProvider, now: i64) -> AppResult<StartOutcome> {
        self.check_invariant()?;

        let last_state = self.entries.last().map(|e| e.state);
        let outcome = match last_state {
            None | Some(EntryState::Hashed) => {
                self.append_pending(now);
                StartOutcome::Opened { start: now }
            }
            Some(EntryState::Pending) => {
                let last = self.last_mut()?;
                let previous = last.start;
                last.start = now;
                StartOutcome::Restarted {
                    previous,
                    start: now,
                }
            }
            Some(EntryState::Partial) => {
                // Resolve before touching anything so a git failure leaves
                // the timecard as it was.
                let hash = git.current_hash()?;
                let last = self.last_mut()?;
                last.hash = hash.clone();
                last.state = EntryState::Hashed;
                self.append_pending(now);
                StartOutcome::Attributed { hash, start: now }
            }
        };

        self.flush()?;
        Ok(outcome)
    }

    pub fn end(&mut self) -> AppResult<EndOutcome> {
        self.end_at(now())
    }

    /// Close the pending session at `now`.
    pub fn end_at(&mut self, now: i64) -> AppResult<EndOutcome> {
        self.check_invariant()?;

        let last = match self.entries.last_mut() {
            Some(e) => e,
            None => return Err(no_active_session()),
        };

        let state = last.state;
        match state {
            EntryState::Pending => {
                last.end = now;
                last.state = EntryState::Partial;
                let outcome = EndOutcome::Closed {
                    start: last.start,
                    end: now,
                };
                self.flush()?;
                Ok(outcome)
            }
            EntryState::Partial => Err(AppError::State(
                "timecard entry already closed".into(),
            )),
            EntryState::Hashed => Err(no_active_session()),
        }
    }

    fn append_pending(&mut self, start: i64) {
        self.entries.push(Entry::pending(start));
        self.header.count += 1;
    }

    fn last_mut(&mut self) -> AppResult<&mut Entry> {
        let actual = self.entries.len();
        let stored = self.header.count;
        self.entries
            .last_mut()
            .ok_or(AppError::Invariant { stored, actual })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Non-empty entry lines dropped by the last load.
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }

    #[cfg(test)]
    fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }
}

fn no_active_session() -> AppError {
    AppError::State("no active session: \"timecard end\" without \"timecard start\"".into())
}
