//! Keybinding definitions for Blamebar
//!
//! All keybindings are defined here for easy modification.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application, or close the sidebar when it is open
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Close the sidebar (quit when it is already closed)
pub const ESC: KeyCode = KeyCode::Esc;

/// Toggle the blame sidebar
pub const TOGGLE_BLAME: KeyCode = KeyCode::Char('b');

// =============================================================================
// Navigation keys
// =============================================================================

/// Scroll up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Scroll up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Scroll down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Scroll down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Half page down
pub const HALF_PAGE_DOWN: KeyCode = KeyCode::Char('d');

/// Half page up
pub const HALF_PAGE_UP: KeyCode = KeyCode::Char('u');

/// Check if key is scroll up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is scroll down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_BLAME: KeyHint = KeyHint {
    key: "b",
    label: "Blame",
    color: Color::Magenta,
};
pub const HINT_CLOSE: KeyHint = KeyHint {
    key: "b/Esc",
    label: "Close",
    color: Color::Magenta,
};
pub const HINT_NAV: KeyHint = KeyHint {
    key: "j/k",
    label: "Scroll",
    color: Color::Cyan,
};
pub const HINT_HALF_PAGE: KeyHint = KeyHint {
    key: "d/u",
    label: "Half page",
    color: Color::Cyan,
};
pub const HINT_TOP_BOTTOM: KeyHint = KeyHint {
    key: "g/G",
    label: "Top/Bottom",
    color: Color::Cyan,
};
pub const HINT_REFRESH: KeyHint = KeyHint {
    key: "^L",
    label: "Refresh",
    color: Color::Blue,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};

/// Status bar hints while the sidebar is closed
pub const CLOSED_HINTS: &[KeyHint] = &[
    HINT_BLAME,
    HINT_NAV,
    HINT_HALF_PAGE,
    HINT_TOP_BOTTOM,
    HINT_REFRESH,
    HINT_QUIT,
];

/// Status bar hints while the sidebar is open
pub const OPEN_HINTS: &[KeyHint] = &[
    HINT_CLOSE,
    HINT_NAV,
    HINT_HALF_PAGE,
    HINT_TOP_BOTTOM,
    HINT_REFRESH,
    HINT_QUIT,
];

/// Get the appropriate hints for the current sidebar state.
pub fn current_hints(sidebar_open: bool) -> &'static [KeyHint] {
    if sidebar_open { OPEN_HINTS } else { CLOSED_HINTS }
}
