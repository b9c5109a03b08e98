use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Single-line edit buffer for popup fields. The cursor is a byte offset
/// kept on a char boundary; prefilled text can carry any name the cluster
/// returns, not just ASCII.
#[derive(Clone, Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
}

impl Input {
    pub(super) fn with_text(text: &str) -> Self {
        Self {
            buf: text.to_string(),
            cursor: text.len(),
        }
    }

    fn prev_boundary(&self) -> usize {
        self.buf[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(at, _)| at)
    }

    pub(super) fn insert_char(&mut self, c: char) {
        self.buf.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor = self.prev_boundary();
        self.buf.remove(self.cursor);
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.buf.len() {
            return;
        }
        self.buf.remove(self.cursor);
    }

    pub(super) fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub(super) fn move_right(&mut self) {
        if let Some(c) = self.buf[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Terminal column of the cursor, counting chars rather than bytes.
    pub(super) fn col(&self) -> u16 {
        self.buf[..self.cursor].chars().count() as u16
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CreateField {
    Name,
    Shards,
    Replicas,
}

impl CreateField {
    fn next(self) -> Self {
        match self {
            CreateField::Name => CreateField::Shards,
            CreateField::Shards => CreateField::Replicas,
            CreateField::Replicas => CreateField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            CreateField::Name => CreateField::Replicas,
            CreateField::Shards => CreateField::Name,
            CreateField::Replicas => CreateField::Shards,
        }
    }
}

#[derive(Clone, Debug)]
pub(super) enum ModalKind {
    Help,
    ConfirmDelete {
        names: Vec<String>,
    },
    CreateIndex {
        source: String,
        name: Input,
        shards: Input,
        replicas: Input,
        focus: CreateField,
    },
    OptimizePrompt {
        names: Vec<String>,
        input: Input,
    },
    ReplicasPrompt {
        names: Vec<String>,
        input: Input,
    },
}

#[derive(Clone, Debug)]
pub(super) struct Modal {
    pub(super) kind: ModalKind,
    /// Validation message shown at the bottom of the popup.
    pub(super) notice: Option<String>,
}

impl Modal {
    pub(super) fn help() -> Self {
        Self {
            kind: ModalKind::Help,
            notice: None,
        }
    }

    pub(super) fn confirm_delete(names: Vec<String>) -> Self {
        Self {
            kind: ModalKind::ConfirmDelete { names },
            notice: None,
        }
    }

    pub(super) fn create_index(
        source: &str,
        suggested: &str,
        shards: Option<i64>,
        replicas: Option<i64>,
    ) -> Self {
        Self {
            kind: ModalKind::CreateIndex {
                source: source.to_string(),
                name: Input::with_text(suggested),
                shards: Input::with_text(&shards.unwrap_or(5).to_string()),
                replicas: Input::with_text(&replicas.unwrap_or(0).to_string()),
                focus: CreateField::Name,
            },
            notice: None,
        }
    }

    pub(super) fn optimize_prompt(names: Vec<String>) -> Self {
        Self {
            kind: ModalKind::OptimizePrompt {
                names,
                input: Input::with_text("1"),
            },
            notice: None,
        }
    }

    pub(super) fn replicas_prompt(names: Vec<String>, current: Option<i64>) -> Self {
        Self {
            kind: ModalKind::ReplicasPrompt {
                names,
                input: Input::with_text(&current.unwrap_or(0).to_string()),
            },
            notice: None,
        }
    }
}

/// What a key press inside a modal asks the app to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum ModalAction {
    None,
    Close,
    Delete {
        names: Vec<String>,
    },
    Create {
        name: String,
        shards: i64,
        replicas: i64,
    },
    Optimize {
        names: Vec<String>,
        max_segments: i64,
    },
    Replicas {
        names: Vec<String>,
        count: i64,
    },
}

/// Maps one key press to a modal action, editing popup fields in place.
pub(super) fn handle_modal_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    match &mut modal.kind {
        ModalKind::Help => ModalAction::Close,
        ModalKind::ConfirmDelete { names } => match key.code {
            KeyCode::Char('y') => ModalAction::Delete {
                names: std::mem::take(names),
            },
            KeyCode::Char('n') | KeyCode::Esc => ModalAction::Close,
            _ => ModalAction::None,
        },
        ModalKind::CreateIndex {
            name,
            shards,
            replicas,
            focus,
            ..
        } => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Down | KeyCode::Tab => {
                *focus = focus.next();
                ModalAction::None
            }
            KeyCode::Up | KeyCode::BackTab => {
                *focus = focus.prev();
                ModalAction::None
            }
            KeyCode::Enter => {
                let (Ok(shards), Ok(replicas)) =
                    (shards.buf.parse::<i64>(), replicas.buf.parse::<i64>())
                else {
                    modal.notice = Some("shard and replica counts must be numbers".to_string());
                    return ModalAction::None;
                };
                if name.buf.trim().is_empty() {
                    modal.notice = Some("index name must not be empty".to_string());
                    return ModalAction::None;
                }
                ModalAction::Create {
                    name: name.buf.trim().to_string(),
                    shards,
                    replicas,
                }
            }
            _ => {
                let digits_only = *focus != CreateField::Name;
                let input = match focus {
                    CreateField::Name => name,
                    CreateField::Shards => shards,
                    CreateField::Replicas => replicas,
                };
                apply_edit_key(input, key, digits_only);
                ModalAction::None
            }
        },
        ModalKind::OptimizePrompt { names, input } => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => match input.buf.parse::<i64>() {
                Ok(max_segments) => ModalAction::Optimize {
                    names: std::mem::take(names),
                    max_segments,
                },
                Err(_) => {
                    modal.notice = Some("enter a segment count".to_string());
                    ModalAction::None
                }
            },
            _ => {
                apply_edit_key(input, key, true);
                ModalAction::None
            }
        },
        ModalKind::ReplicasPrompt { names, input } => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => match input.buf.parse::<i64>() {
                Ok(count) => ModalAction::Replicas {
                    names: std::mem::take(names),
                    count,
                },
                Err(_) => {
                    modal.notice = Some("enter a replica count".to_string());
                    ModalAction::None
                }
            },
            _ => {
                apply_edit_key(input, key, true);
                ModalAction::None
            }
        },
    }
}

fn apply_edit_key(input: &mut Input, key: KeyEvent, digits_only: bool) {
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            if c.is_ascii_digit() || (!digits_only && c.is_ascii() && !c.is_control()) {
                input.insert_char(c);
            }
        }
        _ => {}
    }
}

const HELP_LINES: [&str; 12] = [
    "escon - cluster index console",
    "",
    "moving    j/k or arrows, page up/down, g/G first/last",
    "selecting v mark index, c clear marks",
    "          f filter, / search (not implemented)",
    "commands  D delete marked indices",
    "          A create the index following the marked one",
    "          O optimize (merge segments) marked indices",
    "          R set replica count on marked indices",
    "misc      space refresh, esc close popups, q quit",
    "",
    "press any key to close",
];

/// Draws the active modal centered over `area`, clearing what is beneath.
pub(super) fn draw_modal(frame: &mut Frame, area: Rect, modal: &Modal) {
    let (title, mut lines, want_w, cursor_at) = modal_body(modal);
    if let Some(notice) = &modal.notice {
        lines.push(Line::default());
        lines.push(Line::styled(notice.clone(), Style::default().fg(Color::Red)));
    }

    let w = want_w.min(area.width.saturating_sub(4)).max(20);
    let h = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let rect = Rect::new(x, y, w, h);

    frame.render_widget(Clear, rect);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);

    if let Some((line, column)) = cursor_at {
        frame.set_cursor_position((inner.x + column, inner.y + line));
    }
}

/// Builds the text body for each modal kind. Returns the title, the body
/// lines, the preferred popup width, and where to park the terminal cursor
/// (line, column) for kinds with editable fields.
fn modal_body(modal: &Modal) -> (&'static str, Vec<Line<'static>>, u16, Option<(u16, u16)>) {
    match &modal.kind {
        ModalKind::Help => {
            let lines = HELP_LINES.iter().map(|l| Line::raw(*l)).collect();
            ("help", lines, 64, None)
        }
        ModalKind::ConfirmDelete { names } => {
            let mut lines = vec![
                Line::raw(format!("Delete {} indices?", names.len())),
                Line::default(),
            ];
            for name in names.iter().take(8) {
                lines.push(Line::raw(format!("  {name}")));
            }
            if names.len() > 8 {
                lines.push(Line::raw(format!("  ... and {} more", names.len() - 8)));
            }
            lines.push(Line::default());
            lines.push(Line::raw("y to delete, n to cancel"));
            ("confirm", lines, 48, None)
        }
        ModalKind::CreateIndex {
            source,
            name,
            shards,
            replicas,
            focus,
        } => {
            let lines = vec![
                Line::raw(format!("create the index following {source}")),
                Line::default(),
                Line::raw(format!("index name : {}", name.buf)),
                Line::raw(format!("shards     : {}", shards.buf)),
                Line::raw(format!("replicas   : {}", replicas.buf)),
                Line::default(),
                Line::raw("up/down to switch fields, enter to create, esc to cancel"),
            ];
            let (line, input) = match focus {
                CreateField::Name => (2, name),
                CreateField::Shards => (3, shards),
                CreateField::Replicas => (4, replicas),
            };
            const LABEL_W: u16 = 13;
            ("create index", lines, 60, Some((line, LABEL_W + input.col())))
        }
        ModalKind::OptimizePrompt { names, input } => {
            let lines = vec![
                Line::raw(format!("optimize {} indices down to", names.len())),
                Line::default(),
                Line::raw(format!("max segments per shard: {}", input.buf)),
                Line::default(),
                Line::raw("enter to optimize, esc to cancel"),
            ];
            const LABEL_W: u16 = 24;
            ("optimize", lines, 44, Some((2, LABEL_W + input.col())))
        }
        ModalKind::ReplicasPrompt { names, input } => {
            let lines = vec![
                Line::raw(format!("set replica count on {} indices", names.len())),
                Line::default(),
                Line::raw(format!("replicas: {}", input.buf)),
                Line::default(),
                Line::raw("enter to apply, esc to cancel"),
            ];
            const LABEL_W: u16 = 10;
            ("replicas", lines, 44, Some((2, LABEL_W + input.col())))
        }
    }
}

#[cfg(test)]
#[path = "../tests/console/modal_tests.rs"]
mod tests;
