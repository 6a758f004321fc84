//! Unified application error type.
//! Codecs, the timecard aggregate, the git accessor and the CLI layer all
//! return AppError so the binary can report failures in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Record format
    // ---------------------------
    #[error("Format error: {0}")]
    Format(String),

    // ---------------------------
    // Git
    // ---------------------------
    #[error("Could not find a valid git repository at {0}. Did you \"git init\"?")]
    NotGitRepo(String),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    // ---------------------------
    // Session state
    // ---------------------------
    #[error("{0}")]
    State(String),

    /// Stored entry count disagrees with the entries held in memory.
    /// Fatal: the operation is aborted and the file is never rewritten.
    #[error("Header count and entry length mismatch (header: {stored}, entries: {actual})")]
    Invariant { stored: u32, actual: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Invariant { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// An error tagged with the command that produced it.
#[derive(Error, Debug)]
#[error("{command} command failed: {source}")]
pub struct CommandFailure {
    pub command: &'static str,
    #[source]
    pub source: AppError,
}

impl CommandFailure {
    /// Process exit status: 2 for fatal consistency faults, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.source.is_fatal() { 2 } else { 1 }
    }
}
