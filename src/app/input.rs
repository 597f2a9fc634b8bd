//! Input handling for the application

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::App;
use crate::keys;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }

        if keys::is_refresh_key(&key) {
            self.refresh();
            return;
        }

        match key.code {
            keys::QUIT | keys::ESC => {
                if self.session.is_open() {
                    self.close_sidebar();
                } else {
                    self.quit();
                }
            }
            keys::TOGGLE_BLAME => self.toggle_sidebar(),
            keys::GO_TOP => self.scroll_to_top(),
            keys::GO_BOTTOM => self.scroll_to_bottom(),
            keys::HALF_PAGE_DOWN => self.half_page_down(),
            keys::HALF_PAGE_UP => self.half_page_up(),
            code if keys::is_move_up(code) => self.scroll_by(-1),
            code if keys::is_move_down(code) => self.scroll_by(1),
            _ => {}
        }
    }
}
