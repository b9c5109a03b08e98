use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use time::OffsetDateTime;

use crate::snapshot::{ClusterSnapshot, IndexView};

use super::app::{App, MessageKind};
use super::modal;

pub(super) fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(5),
        ])
        .split(frame.area());

    draw_health(frame, chunks[0], app);
    draw_table(frame, chunks[1], app);
    draw_messages(frame, chunks[2], app);

    if let Some(modal) = &app.modal {
        modal::draw_modal(frame, frame.area(), modal);
    }
}

fn draw_health(frame: &mut Frame, area: Rect, app: &App) {
    let para =
        Paragraph::new(app.health.get()).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(para, area);
}

fn draw_table(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let header = Line::styled(
        ClusterSnapshot::header_line(),
        Style::default().add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(header), rows[0]);

    let now = OffsetDateTime::now_utc();
    let items: Vec<ListItem> = if app.snapshot.is_empty() {
        vec![ListItem::new("(no indices)")]
    } else {
        app.snapshot
            .entries()
            .iter()
            .enumerate()
            .map(|(position, view)| {
                let optimizing = app.optimizing.contains(view.name());
                let item = ListItem::new(row_line(view, now, optimizing));
                if app.selection.is_marked(position) {
                    item.style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    item
                }
            })
            .collect()
    };

    let list = List::new(items).highlight_style(Style::default().bg(Color::DarkGray));
    let mut state = ListState::default();
    if !app.snapshot.is_empty() {
        state.select(Some(app.selection.cursor()));
    }
    frame.render_stateful_widget(list, rows[1], &mut state);
}

fn draw_messages(frame: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(1) as usize;
    let start = app.messages.len().saturating_sub(visible);
    let lines: Vec<Line> = app.messages[start..]
        .iter()
        .map(|message| {
            let color = match message.kind {
                MessageKind::Info => Color::White,
                MessageKind::Error => Color::Red,
            };
            Line::styled(message.text.clone(), Style::default().fg(color))
        })
        .collect();

    let block = Block::default().borders(Borders::TOP).title(
        "space: refresh  v: mark  D: delete  A: create-after  O: optimize  R: replicas  ?: help",
    );
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn row_line(view: &IndexView, now: OffsetDateTime, optimizing: bool) -> String {
    let mut cells = view.cells(now);
    if optimizing {
        // overlay the pri.size column until the next refresh
        cells[8] = "optimizing".to_string();
    }
    ClusterSnapshot::layout_row(&cells.each_ref().map(|cell| cell.as_str()))
}
