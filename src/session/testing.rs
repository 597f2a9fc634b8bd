//! Test double for the [`Host`] trait
//!
//! Wraps the real in-memory [`EditorHost`] for pane/scroll behavior and
//! replaces the blame invocation with canned output, so session tests run
//! without git or a filesystem.

use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::git::GitError;
use crate::host::{EditorHost, Host, HostError, ScrollEvent, SubscriptionId, ViewId};
use crate::model::Rgb;

pub(crate) struct FakeHost {
    pub inner: EditorHost,
    /// Canned blame result: Ok(raw report) or Err(raw failure text, exit code)
    pub blame: Result<String, (String, i32)>,
}

impl FakeHost {
    pub(crate) fn new(file: Option<&str>, source_lines: usize, blame: Result<String, (String, i32)>) -> Self {
        let lines = (0..source_lines).map(|i| format!("line {}", i)).collect();
        Self {
            inner: EditorHost::from_lines(file.map(PathBuf::from), lines),
            blame,
        }
    }
}

impl Host for FakeHost {
    fn current_file_path(&self) -> Result<PathBuf, HostError> {
        self.inner.current_file_path()
    }

    fn run_blame(&self, _path: &Path) -> Result<String, GitError> {
        match &self.blame {
            Ok(report) => Ok(report.clone()),
            Err((output, exit_code)) => Err(GitError::CommandFailed {
                output: output.clone(),
                exit_code: *exit_code,
            }),
        }
    }

    fn create_sidebar(&mut self, width: u16, tag: &str) -> ViewId {
        self.inner.create_sidebar(width, tag)
    }

    fn write_lines(&mut self, view: ViewId, lines: Vec<String>) {
        self.inner.write_lines(view, lines);
    }

    fn set_line_highlight(&mut self, view: ViewId, lines: Range<usize>, color: Rgb) {
        self.inner.set_line_highlight(view, lines, color);
    }

    fn close_view(&mut self, view: ViewId) {
        self.inner.close_view(view);
    }

    fn tagged_view(&self, tag: &str) -> Option<ViewId> {
        self.inner.tagged_view(tag)
    }

    fn view_is_live(&self, view: ViewId) -> bool {
        self.inner.view_is_live(view)
    }

    fn topline(&self, view: ViewId) -> Option<usize> {
        self.inner.topline(view)
    }

    fn set_topline(&mut self, view: ViewId, topline: usize) {
        self.inner.set_topline(view, topline);
    }

    fn subscribe_scroll(&mut self, view: ViewId) -> SubscriptionId {
        self.inner.subscribe_scroll(view)
    }

    fn unsubscribe_scroll(&mut self, subscription: SubscriptionId) {
        self.inner.unsubscribe_scroll(subscription);
    }
}

impl FakeHost {
    pub(crate) fn take_scroll_events(&mut self) -> Vec<ScrollEvent> {
        self.inner.take_scroll_events()
    }
}
