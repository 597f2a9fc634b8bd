//! Blamebar - a terminal blame sidebar
//!
//! Binary entry point for the TUI application.

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use blamebar::app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: blamebar <file>");
        std::process::exit(2);
    };

    let app = App::open(&path)?;
    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with a 200ms timeout so resize events repaint promptly.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    Ok(())
}
