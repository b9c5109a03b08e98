use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::app::App;
use super::{keys, render};

/// Draw-then-poll loop. The health line repaints on its own as the poller
/// thread updates the shared cell; everything else changes only on key
/// presses.
pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|frame| render::draw(frame, app))
            .context("draw frame")?;

        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll input")? {
            match event::read().context("read input")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => keys::handle_key(app, key),
                _ => {}
            }
        }
    }
}
