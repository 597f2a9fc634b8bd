//! Application state and scroll/session management

use std::cell::Cell;
use std::io;
use std::path::Path;

use crate::host::{EditorHost, Host};
use crate::session::SidebarSession;

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// The in-process editor surface (source pane + sidebar pane)
    pub editor: EditorHost,
    /// Sidebar session (blame strip + scroll sync)
    pub session: SidebarSession,
    /// Error message to display
    pub error_message: Option<String>,
    /// Last known viewport height (updated during render, uses Cell for interior mutability)
    pub(crate) last_frame_height: Cell<u16>,
}

impl App {
    /// Load a file and open the blame sidebar for it.
    ///
    /// A sidebar that cannot open (not a repository, blame failure) is not
    /// fatal: the source still shows, with the error in the banner.
    pub fn open(path: &Path) -> io::Result<Self> {
        let editor = EditorHost::open_file(path)?;
        let mut app = Self {
            running: true,
            editor,
            session: SidebarSession::new(),
            error_message: None,
            last_frame_height: Cell::new(24),
        };
        app.toggle_sidebar();
        Ok(app)
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Toggle the blame sidebar for the source view.
    pub(crate) fn toggle_sidebar(&mut self) {
        let primary = self.editor.source_view();
        if let Err(e) = self.session.toggle(&mut self.editor, primary) {
            self.error_message = Some(e.to_string());
        }
    }

    pub(crate) fn close_sidebar(&mut self) {
        self.session.close(&mut self.editor);
    }

    /// Reload the file from disk and recompute the sidebar from scratch.
    pub(crate) fn refresh(&mut self) {
        if let Err(e) = self.editor.reload_file() {
            self.error_message = Some(e.to_string());
            return;
        }
        if self.session.is_open() {
            let primary = self.editor.source_view();
            if let Err(e) = self.session.open(&mut self.editor, primary) {
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Scroll the source view by `delta` lines; the sidebar follows through
    /// the session's scroll subscription.
    pub(crate) fn scroll_by(&mut self, delta: isize) {
        let view = self.editor.source_view();
        let Some(current) = self.editor.topline(view) else {
            return;
        };
        let target = current.saturating_add_signed(delta).min(self.max_topline());
        self.editor.set_topline(view, target);
        self.pump_scroll_events();
    }

    pub(crate) fn scroll_to_top(&mut self) {
        let view = self.editor.source_view();
        self.editor.set_topline(view, 0);
        self.pump_scroll_events();
    }

    pub(crate) fn scroll_to_bottom(&mut self) {
        let view = self.editor.source_view();
        self.editor.set_topline(view, self.max_topline());
        self.pump_scroll_events();
    }

    pub(crate) fn half_page_down(&mut self) {
        self.scroll_by(self.half_page() as isize);
    }

    pub(crate) fn half_page_up(&mut self) {
        self.scroll_by(-(self.half_page() as isize));
    }

    fn half_page(&self) -> usize {
        (self.viewport_height() / 2).max(1)
    }

    pub(crate) fn viewport_height(&self) -> usize {
        self.last_frame_height.get() as usize
    }

    /// Highest topline that still fills the viewport
    fn max_topline(&self) -> usize {
        let line_count = self
            .editor
            .pane(self.editor.source_view())
            .map_or(0, |p| p.lines.len());
        line_count.saturating_sub(self.viewport_height().max(1))
    }

    /// Deliver queued host scroll notifications to the session.
    pub(crate) fn pump_scroll_events(&mut self) {
        for event in self.editor.take_scroll_events() {
            self.session.on_scroll(&mut self.editor, event);
        }
    }
}
