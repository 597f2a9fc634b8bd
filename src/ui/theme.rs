//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance. The gradient
//! endpoint tones themselves live in [`crate::model::gradient`]; this module
//! handles their terminal rendering.

use ratatui::style::Color;

use crate::model::Rgb;

/// Convert a model RGB triple into a terminal color
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Pick a readable text color for the given background tone.
///
/// Uses the Rec. 601 luma weights; light backgrounds get black text.
pub fn contrast_text(background: Rgb) -> Color {
    let luma = 0.299 * f64::from(background.r)
        + 0.587 * f64::from(background.g)
        + 0.114 * f64::from(background.b);
    if luma > 150.0 { Color::Black } else { Color::White }
}

/// Colors for the source pane
pub mod source_view {
    use super::*;

    /// Line number gutter color
    pub const LINE_NUMBER: Color = Color::DarkGray;
}

/// Colors for the blame sidebar
pub mod sidebar {
    use super::*;

    /// Lines without a bucket (uncommitted / placeholder)
    pub const UNCOMMITTED: Color = Color::DarkGray;
}
