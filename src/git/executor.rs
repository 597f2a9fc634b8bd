//! git command executor
//!
//! Handles running git commands and capturing their output. Invocation is
//! blocking: the caller suspends until the external process exits.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::GitError;
use super::constants::{self, commands, errors, flags};

/// Executor for git commands
#[derive(Debug, Clone, Default)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        // Add repository path if specified
        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.args(args);

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.to_lowercase().contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            // Surface whatever the tool printed, verbatim
            let raw = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout).into_owned()
            } else {
                stderr
            };
            Err(GitError::CommandFailed {
                output: raw,
                exit_code,
            })
        }
    }

    /// Run `git blame --line-porcelain` for a file
    pub fn blame_raw(&self, file: &Path) -> Result<String, GitError> {
        let file = file.to_string_lossy();
        self.run(&[
            commands::BLAME,
            flags::LINE_PORCELAIN,
            flags::PATH_SEPARATOR,
            &file,
        ])
    }
}
