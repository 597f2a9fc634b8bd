//! Rendering for the source pane

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::host::editor::Pane;
use crate::ui::{components, theme};

/// Render the source file with a line-number gutter, starting at the pane's
/// topline.
pub fn render(frame: &mut Frame, area: Rect, pane: &Pane, title: &str) {
    let block = components::bordered_block(Line::from(format!(" {} ", title)).bold().cyan());

    if pane.lines.is_empty() {
        let paragraph = components::empty_state("Empty file", None).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    if inner_height == 0 {
        return;
    }

    let number_width = pane.lines.len().to_string().len().max(3);
    let mut lines: Vec<Line> = Vec::new();
    for (idx, content) in pane.lines.iter().enumerate().skip(pane.topline) {
        if lines.len() >= inner_height {
            break;
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>width$} ", idx + 1, width = number_width),
                Style::default().fg(theme::source_view::LINE_NUMBER),
            ),
            Span::raw(content.clone()),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
