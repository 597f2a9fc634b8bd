//! Sidebar session lifecycle
//!
//! One open-to-close lifecycle of the annotation pane: blame → parse →
//! gradient → pane content → scroll sync. All state is rebuilt from scratch
//! on every open and discarded on close.

mod sync;
#[cfg(test)]
pub(crate) mod testing;

pub use sync::ScrollSync;

use std::ops::Range;

use thiserror::Error;

use crate::git::{GitError, Parser};
use crate::host::{Host, HostError, ScrollEvent, ViewId};
use crate::model::{AgeGradient, Annotation};

/// Tag identifying the sidebar pane, so a toggle can find strays
pub const SIDEBAR_TAG: &str = "blame-sidebar";

/// Fixed sidebar column width (author + date cell)
pub const SIDEBAR_WIDTH: u16 = 30;

/// Outcome of a toggle call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Opened,
    Closed,
}

/// Errors that abort opening the sidebar
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Git(#[from] GitError),
}

/// Owns one sidebar lifecycle: the pane handle, the scroll subscription,
/// and the gradient configuration. At most one session is open at a time;
/// opening collapses any existing one first.
#[derive(Debug, Default)]
pub struct SidebarSession {
    gradient: AgeGradient,
    sync: ScrollSync,
    sidebar: Option<ViewId>,
}

impl SidebarSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gradient(gradient: AgeGradient) -> Self {
        Self {
            gradient,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.sidebar.is_some()
    }

    /// The sidebar pane handle while the session is open
    pub fn sidebar_view(&self) -> Option<ViewId> {
        self.sidebar
    }

    /// Open the sidebar if closed, close it if open.
    ///
    /// Close-when-idle is a no-op, not an error.
    pub fn toggle(&mut self, host: &mut dyn Host, primary: ViewId) -> Result<Toggle, SessionError> {
        if self.is_open() {
            self.close(host);
            Ok(Toggle::Closed)
        } else {
            self.open(host, primary)?;
            Ok(Toggle::Opened)
        }
    }

    /// Build the sidebar next to `primary` and start scroll sync.
    ///
    /// Any existing session and any stray tagged pane are collapsed first
    /// (true toggle, never stacking). All fallible steps run before the
    /// pane is created, so a failed open leaves the host untouched.
    pub fn open(&mut self, host: &mut dyn Host, primary: ViewId) -> Result<(), SessionError> {
        self.close(host);
        if let Some(stray) = host.tagged_view(SIDEBAR_TAG) {
            host.close_view(stray);
        }

        let path = host.current_file_path()?;
        let raw = host.run_blame(&path)?;
        let mut annotations = Parser::parse_blame(&raw);
        self.gradient.assign(&mut annotations);

        let sidebar = host.create_sidebar(SIDEBAR_WIDTH, SIDEBAR_TAG);
        let width = SIDEBAR_WIDTH as usize;
        host.write_lines(
            sidebar,
            annotations.iter().map(|a| a.display_label(width)).collect(),
        );
        for (lines, bucket) in bucket_runs(&annotations) {
            host.set_line_highlight(sidebar, lines, self.gradient.color(bucket));
        }

        self.sync.activate(host, primary, sidebar);
        self.sidebar = Some(sidebar);
        Ok(())
    }

    /// Cancel the subscription and close the sidebar pane. Idempotent.
    pub fn close(&mut self, host: &mut dyn Host) {
        self.sync.deactivate(host);
        if let Some(sidebar) = self.sidebar.take() {
            host.close_view(sidebar);
        }
    }

    /// Feed one host scroll notification through the coordinator.
    ///
    /// If the coordinator tore itself down (a view went stale), the rest of
    /// the session is discarded too, silently.
    pub fn on_scroll(&mut self, host: &mut dyn Host, event: ScrollEvent) {
        self.sync.on_scroll(host, event);
        if self.sidebar.is_some() && !self.sync.is_active() {
            self.close(host);
        }
    }
}

/// Group consecutive same-bucket lines into ranges for the highlight calls.
/// Colorless (uncommitted/placeholder) lines break runs and get no range.
fn bucket_runs(annotations: &[Annotation]) -> Vec<(Range<usize>, u8)> {
    let mut runs: Vec<(Range<usize>, u8)> = Vec::new();
    for annotation in annotations {
        let Some(bucket) = annotation.color_bucket else {
            continue;
        };
        match runs.last_mut() {
            Some((range, last)) if *last == bucket && range.end == annotation.line_index => {
                range.end += 1;
            }
            _ => runs.push((annotation.line_index..annotation.line_index + 1, bucket)),
        }
    }
    runs
}
