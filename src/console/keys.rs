use crossterm::event::{KeyCode, KeyEvent};

use super::app::App;

/// Top-level key dispatch. An open popup captures every key first.
pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        app.on_modal_key(key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Char(' ') => app.refresh(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Char('g') => app.cursor_first(),
        KeyCode::Char('G') => app.cursor_last(),
        KeyCode::PageDown => app.cursor_page(10),
        KeyCode::PageUp => app.cursor_page(-10),
        KeyCode::Char('v') => app.toggle_mark(),
        KeyCode::Char('c') => app.clear_marks(),
        KeyCode::Char('D') => app.request_delete(),
        KeyCode::Char('A') => app.request_create_after(),
        KeyCode::Char('O') => app.request_optimize(),
        KeyCode::Char('R') => app.request_replicas(),
        KeyCode::Char('f') | KeyCode::Char('/') => {
            app.error("filtering is not implemented".to_string());
        }
        _ => {}
    }
}
