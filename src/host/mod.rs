//! Host capability interface
//!
//! The sidebar core (session, scroll sync) never talks to a concrete editor
//! surface; everything it needs from the surrounding environment goes
//! through the [`Host`] trait. [`editor::EditorHost`] is the in-process
//! adapter used by the TUI binary.

pub mod editor;

pub use editor::EditorHost;

use std::ops::Range;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::git::GitError;
use crate::model::Rgb;

/// Handle to one scrollable view owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

impl ViewId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Token for one live scroll subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Scroll notification, attributed to the view whose topline changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEvent {
    pub view: ViewId,
    pub topline: usize,
}

/// Errors raised by the host surface itself
#[derive(Error, Debug)]
pub enum HostError {
    #[error("No file is associated with the current view")]
    NoFile,
}

/// The narrow contract between the sidebar core and its host editor.
///
/// View handles may go stale at any time (the user can close a pane out
/// from under the core); read accessors return `Option`/no-op on dead
/// handles and [`Host::view_is_live`] probes liveness explicitly.
pub trait Host {
    /// Path of the file shown in the primary view
    fn current_file_path(&self) -> Result<PathBuf, HostError>;

    /// Run the blame tool for a file, blocking until it exits.
    ///
    /// Returns the raw report text; a non-zero exit surfaces the tool's raw
    /// output inside the error.
    fn run_blame(&self, path: &Path) -> Result<String, GitError>;

    /// Create a fixed-width, read-only, tagged sidebar pane
    fn create_sidebar(&mut self, width: u16, tag: &str) -> ViewId;

    /// Replace a pane's content with an ordered sequence of display lines
    fn write_lines(&mut self, view: ViewId, lines: Vec<String>);

    /// Apply an RGB background color to a 0-based line range of a pane
    fn set_line_highlight(&mut self, view: ViewId, lines: Range<usize>, color: Rgb);

    /// Close a pane; a dead handle is a no-op
    fn close_view(&mut self, view: ViewId);

    /// Find a live pane carrying the given tag
    fn tagged_view(&self, tag: &str) -> Option<ViewId>;

    fn view_is_live(&self, view: ViewId) -> bool;

    /// Topmost visible line of a view (None when the handle is dead)
    fn topline(&self, view: ViewId) -> Option<usize>;

    /// Set the topmost visible line, clamped to document bounds
    fn set_topline(&mut self, view: ViewId, topline: usize);

    /// Start delivering scroll notifications for a view
    fn subscribe_scroll(&mut self, view: ViewId) -> SubscriptionId;

    /// Cancel a subscription; an unknown token is a no-op
    fn unsubscribe_scroll(&mut self, subscription: SubscriptionId);
}
