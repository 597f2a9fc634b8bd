//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository for testing blame operations.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository in a temporary directory.
    ///
    /// Configures a local identity and disables signing so commits work in
    /// any environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Self { dir };

        repo.git(&["init"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);

        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Write a file and commit it with a fixed author date.
    ///
    /// The date doubles as the blame author-time, so tests can stage commits
    /// of different ages.
    pub fn commit_file(&self, name: &str, content: &str, message: &str, date: &str) {
        self.write_file(name, content);
        self.git(&["add", name]);
        let output = Command::new("git")
            .args(["commit", "-m", message, "--date", date])
            .env("GIT_COMMITTER_DATE", date)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to execute git commit");
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("git commit failed: {}", stderr);
        }
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
