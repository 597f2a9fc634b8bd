//! git command execution layer
//!
//! This module handles executing git commands and parsing blame output.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;

pub use executor::GitExecutor;
pub use parser::Parser;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {output}")]
    CommandFailed { output: String, exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}
