//! Rendering for the blame sidebar pane
//!
//! Each visible annotation cell gets its age-bucket color as background;
//! cells without a bucket (uncommitted or placeholder lines) stay on the
//! default background in a muted foreground.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::host::editor::Pane;
use crate::ui::{components, theme};

/// Render the annotation strip, starting at the pane's topline.
pub fn render(frame: &mut Frame, area: Rect, pane: &Pane) {
    let block = components::bordered_block(Line::from(" Blame ").bold().cyan());

    if pane.lines.is_empty() {
        let paragraph = components::empty_state("No lines to annotate", None).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    if inner_height == 0 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (idx, label) in pane.lines.iter().enumerate().skip(pane.topline) {
        if lines.len() >= inner_height {
            break;
        }
        let style = match pane.highlight_at(idx) {
            Some(rgb) => Style::default()
                .fg(theme::contrast_text(rgb))
                .bg(theme::to_color(rgb)),
            None => Style::default().fg(theme::sidebar::UNCOMMITTED),
        };
        lines.push(Line::from(Span::styled(label.clone(), style)));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
