//! The interactive console: terminal lifecycle, key dispatch, and the
//! state machine behind the index table.

mod app;
mod commands;
mod event_loop;
mod health;
mod keys;
mod modal;
mod render;
mod selection;

pub use self::commands::{NameSuggestError, next_index_name};
pub use self::health::{HEALTH_REFRESH_SECS, HealthCell, spawn_health_poller};
pub use self::selection::SelectionState;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result, bail};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::client::EsClient;

use self::app::App;

/// Opens the console against `client` and blocks until the user quits.
pub fn run(client: EsClient) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        bail!("escon needs an interactive terminal; use the subcommands for scripted output");
    }

    let health = HealthCell::new();
    spawn_health_poller(EsClient::new(client.base_url())?, health.clone());

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(client, health);
    app.refresh();
    let result = event_loop::run_loop(&mut terminal, &mut app);

    // restore the terminal even when the loop errored
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}
