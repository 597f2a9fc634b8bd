//! In-process editor host
//!
//! A minimal editor surface backing the TUI binary: one source pane loaded
//! from disk, any number of auxiliary panes, toplines, ranged background
//! highlights, and scroll notifications for subscribed views. Everything is
//! in memory; nothing is ever written back.

use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};

use super::{Host, HostError, ScrollEvent, SubscriptionId, ViewId};
use crate::git::{GitError, GitExecutor};
use crate::model::Rgb;

/// One ranged background highlight inside a pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineHighlight {
    /// 0-based line range
    pub lines: Range<usize>,
    pub color: Rgb,
}

/// One scrollable pane
#[derive(Debug, Clone)]
pub struct Pane {
    id: ViewId,
    pub lines: Vec<String>,
    /// Topmost visible 0-based line
    pub topline: usize,
    /// Fixed column width (None = flexible)
    pub width: Option<u16>,
    pub readonly: bool,
    pub tag: Option<String>,
    pub highlights: Vec<LineHighlight>,
}

impl Pane {
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Background color covering a line, if any highlight range contains it
    pub fn highlight_at(&self, line: usize) -> Option<Rgb> {
        self.highlights
            .iter()
            .find(|h| h.lines.contains(&line))
            .map(|h| h.color)
    }

    fn max_topline(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }
}

/// Concrete [`Host`] for the terminal application
#[derive(Debug)]
pub struct EditorHost {
    executor: GitExecutor,
    file_path: Option<PathBuf>,
    panes: Vec<Pane>,
    source_view: ViewId,
    next_view: u64,
    next_subscription: u64,
    subscriptions: Vec<(SubscriptionId, ViewId)>,
    events: Vec<ScrollEvent>,
}

impl EditorHost {
    /// Load a file from disk into the source pane.
    ///
    /// The git executor is rooted at the file's directory so blame works no
    /// matter where the process itself was started.
    pub fn open_file(path: &Path) -> io::Result<Self> {
        let path = path.canonicalize()?;
        let text = std::fs::read_to_string(&path)?;
        let lines = text.lines().map(str::to_string).collect();
        let executor = match path.parent() {
            Some(dir) => GitExecutor::with_repo_path(dir.to_path_buf()),
            None => GitExecutor::new(),
        };
        Ok(Self::build(executor, Some(path), lines))
    }

    /// Build a host over an in-memory buffer (not backed by a file).
    pub fn from_lines(path: Option<PathBuf>, lines: Vec<String>) -> Self {
        Self::build(GitExecutor::new(), path, lines)
    }

    fn build(executor: GitExecutor, file_path: Option<PathBuf>, lines: Vec<String>) -> Self {
        let source_view = ViewId::new(1);
        let source = Pane {
            id: source_view,
            lines,
            topline: 0,
            width: None,
            readonly: false,
            tag: None,
            highlights: Vec::new(),
        };
        Self {
            executor,
            file_path,
            panes: vec![source],
            source_view,
            next_view: 2,
            next_subscription: 1,
            subscriptions: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn source_view(&self) -> ViewId {
        self.source_view
    }

    pub fn pane(&self, view: ViewId) -> Option<&Pane> {
        self.panes.iter().find(|p| p.id == view)
    }

    /// Live pane carrying the given tag
    pub fn tagged_pane(&self, tag: &str) -> Option<&Pane> {
        self.panes.iter().find(|p| p.tag.as_deref() == Some(tag))
    }

    /// Drain scroll notifications queued since the last call
    pub fn take_scroll_events(&mut self) -> Vec<ScrollEvent> {
        std::mem::take(&mut self.events)
    }

    /// Re-read the source file from disk, keeping the topline in bounds
    pub fn reload_file(&mut self) -> io::Result<()> {
        let Some(path) = self.file_path.clone() else {
            return Ok(());
        };
        let text = std::fs::read_to_string(&path)?;
        let source_view = self.source_view;
        if let Some(pane) = self.pane_mut(source_view) {
            pane.lines = text.lines().map(str::to_string).collect();
            pane.topline = pane.topline.min(pane.max_topline());
        }
        Ok(())
    }

    /// Number of live scroll subscriptions
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    fn pane_mut(&mut self, view: ViewId) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|p| p.id == view)
    }
}

impl Host for EditorHost {
    fn current_file_path(&self) -> Result<PathBuf, HostError> {
        self.file_path.clone().ok_or(HostError::NoFile)
    }

    fn run_blame(&self, path: &Path) -> Result<String, GitError> {
        self.executor.blame_raw(path)
    }

    fn create_sidebar(&mut self, width: u16, tag: &str) -> ViewId {
        let id = ViewId::new(self.next_view);
        self.next_view += 1;
        self.panes.push(Pane {
            id,
            lines: Vec::new(),
            topline: 0,
            width: Some(width),
            readonly: true,
            tag: Some(tag.to_string()),
            highlights: Vec::new(),
        });
        id
    }

    fn write_lines(&mut self, view: ViewId, lines: Vec<String>) {
        if let Some(pane) = self.pane_mut(view) {
            pane.lines = lines;
            pane.topline = pane.topline.min(pane.max_topline());
        }
    }

    fn set_line_highlight(&mut self, view: ViewId, lines: Range<usize>, color: Rgb) {
        if let Some(pane) = self.pane_mut(view) {
            pane.highlights.push(LineHighlight { lines, color });
        }
    }

    fn close_view(&mut self, view: ViewId) {
        self.panes.retain(|p| p.id != view);
    }

    fn tagged_view(&self, tag: &str) -> Option<ViewId> {
        self.tagged_pane(tag).map(Pane::id)
    }

    fn view_is_live(&self, view: ViewId) -> bool {
        self.panes.iter().any(|p| p.id == view)
    }

    fn topline(&self, view: ViewId) -> Option<usize> {
        self.pane(view).map(|p| p.topline)
    }

    fn set_topline(&mut self, view: ViewId, topline: usize) {
        let Some(pane) = self.pane_mut(view) else {
            return;
        };
        let clamped = topline.min(pane.max_topline());
        if pane.topline == clamped {
            return;
        }
        pane.topline = clamped;
        if self.subscriptions.iter().any(|(_, v)| *v == view) {
            self.events.push(ScrollEvent {
                view,
                topline: clamped,
            });
        }
    }

    fn subscribe_scroll(&mut self, view: ViewId) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions.push((id, view));
        id
    }

    fn unsubscribe_scroll(&mut self, subscription: SubscriptionId) {
        self.subscriptions.retain(|(id, _)| *id != subscription);
    }
}
