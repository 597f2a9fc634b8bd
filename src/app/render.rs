//! Rendering logic for the application

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::state::App;
use crate::host::Host;
use crate::keys;
use crate::session::SIDEBAR_WIDTH;
use crate::ui::views;
use crate::ui::widgets::{render_error_banner, render_status_bar};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Reserve space for status bar at bottom
        let main_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(1),
        };

        // Store visible content height (2 borders) for scroll bounds
        self.last_frame_height.set(main_area.height.saturating_sub(2));

        let title = self
            .editor
            .current_file_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "(no file)".to_string());

        let source_pane = self.editor.pane(self.editor.source_view());
        let sidebar_pane = self
            .session
            .sidebar_view()
            .and_then(|view| self.editor.pane(view));

        match (source_pane, sidebar_pane) {
            (Some(source), Some(sidebar)) => {
                let sidebar_width = sidebar.width.unwrap_or(SIDEBAR_WIDTH) + 2;
                let chunks = Layout::horizontal([
                    Constraint::Length(sidebar_width),
                    Constraint::Min(20),
                ])
                .split(main_area);

                views::sidebar::render(frame, chunks[0], sidebar);
                views::source::render(frame, chunks[1], source, &title);
            }
            (Some(source), None) => {
                views::source::render(frame, main_area, source, &title);
            }
            _ => {}
        }

        render_status_bar(frame, keys::current_hints(self.session.is_open()));

        // Render error banner above the status bar
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }
    }
}
