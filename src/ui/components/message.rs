//! Error message components
//!
//! Provides consistent styling for error messages.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

/// Build an error message line for overlay display
///
/// Returns a styled line suitable for rendering as a banner.
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}
