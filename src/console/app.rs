use std::collections::HashSet;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::client::EsClient;
use crate::snapshot::{ClusterSnapshot, IndexView};

use super::commands::next_index_name;
use super::health::HealthCell;
use super::modal::{self, Modal, ModalAction};
use super::selection::SelectionState;

const MESSAGE_HISTORY: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum MessageKind {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub(super) struct Message {
    pub(super) kind: MessageKind,
    pub(super) text: String,
}

/// All mutable console state: the live snapshot, cursor and marks into it,
/// the optimistic "optimizing" tags, and whatever popup is open.
pub(super) struct App {
    pub(super) client: EsClient,
    pub(super) health: HealthCell,
    pub(super) snapshot: ClusterSnapshot,
    pub(super) selection: SelectionState,
    /// Names tagged by an optimize request; cleared on the next refresh.
    pub(super) optimizing: HashSet<String>,
    pub(super) modal: Option<Modal>,
    pub(super) messages: Vec<Message>,
    pub(super) quit: bool,
}

impl App {
    pub(super) fn new(client: EsClient, health: HealthCell) -> Self {
        Self {
            client,
            health,
            snapshot: ClusterSnapshot::default(),
            selection: SelectionState::default(),
            optimizing: HashSet::new(),
            modal: None,
            messages: Vec::new(),
            quit: false,
        }
    }

    pub(super) fn info(&mut self, text: String) {
        self.push_message(MessageKind::Info, text);
    }

    pub(super) fn error(&mut self, text: String) {
        self.push_message(MessageKind::Error, text);
    }

    fn push_message(&mut self, kind: MessageKind, text: String) {
        self.messages.push(Message { kind, text });
        if self.messages.len() > MESSAGE_HISTORY {
            let excess = self.messages.len() - MESSAGE_HISTORY;
            self.messages.drain(..excess);
        }
    }

    /// Fetches both tables and swaps in a fresh snapshot. Marks and cursor
    /// are discarded because positions refer to the old sort order, and the
    /// optimistic optimize tags are dropped with them. On failure the
    /// current snapshot stays untouched.
    pub(super) fn refresh(&mut self) {
        match self.fetch() {
            Ok(next) => {
                self.snapshot = next;
                self.selection = SelectionState::default();
                self.optimizing.clear();
                let mut note = format!("refreshed: {} indices", self.snapshot.len());
                if !self.snapshot.diagnostics.is_empty() {
                    note.push_str(&format!(
                        ", {} parse notes",
                        self.snapshot.diagnostics.len()
                    ));
                }
                self.info(note);
            }
            Err(err) => self.error(format!("refresh failed: {err:#}")),
        }
    }

    fn fetch(&self) -> Result<ClusterSnapshot> {
        let indices = self.client.cat_indices()?;
        let segments = self.client.cat_segments()?;
        Ok(ClusterSnapshot::parse(
            &indices,
            &segments,
            Some(&self.snapshot),
        ))
    }

    pub(super) fn cursor_up(&mut self) {
        self.selection.cursor_up();
    }

    pub(super) fn cursor_down(&mut self) {
        self.selection.cursor_down(self.snapshot.len());
    }

    pub(super) fn cursor_first(&mut self) {
        self.selection.cursor_first();
    }

    pub(super) fn cursor_last(&mut self) {
        self.selection.cursor_last(self.snapshot.len());
    }

    pub(super) fn cursor_page(&mut self, delta: isize) {
        self.selection.cursor_by(delta, self.snapshot.len());
    }

    pub(super) fn toggle_mark(&mut self) {
        if self.snapshot.is_empty() {
            return;
        }
        self.selection.toggle(self.selection.cursor());
    }

    pub(super) fn clear_marks(&mut self) {
        self.selection.clear();
    }

    fn marked_views(&self) -> Vec<&IndexView> {
        self.selection
            .marked()
            .filter_map(|position| self.snapshot.get(position))
            .collect()
    }

    fn marked_names(&self) -> Vec<String> {
        self.marked_views()
            .iter()
            .map(|view| view.name().to_string())
            .collect()
    }

    pub(super) fn open_help(&mut self) {
        self.modal = Some(Modal::help());
    }

    pub(super) fn request_delete(&mut self) {
        let names = self.marked_names();
        if names.is_empty() {
            self.error("no indices marked (v marks the cursor row)".to_string());
            return;
        }
        self.modal = Some(Modal::confirm_delete(names));
    }

    pub(super) fn request_create_after(&mut self) {
        let marked = self.marked_views();
        if marked.len() != 1 {
            self.error("mark exactly one index to create its successor".to_string());
            return;
        }
        let source = marked[0];
        match next_index_name(source.name()) {
            Ok(suggested) => {
                self.modal = Some(Modal::create_index(
                    source.name(),
                    &suggested,
                    source.record.pri,
                    source.record.rep,
                ));
            }
            Err(err) => self.error(err.to_string()),
        }
    }

    pub(super) fn request_optimize(&mut self) {
        let names = self.marked_names();
        if names.is_empty() {
            self.error("no indices marked (v marks the cursor row)".to_string());
            return;
        }
        self.modal = Some(Modal::optimize_prompt(names));
    }

    pub(super) fn request_replicas(&mut self) {
        let marked = self.marked_views();
        if marked.is_empty() {
            self.error("no indices marked (v marks the cursor row)".to_string());
            return;
        }
        let current = marked[0].record.rep;
        let names = marked.iter().map(|view| view.name().to_string()).collect();
        self.modal = Some(Modal::replicas_prompt(names, current));
    }

    /// Routes a key press into the open popup and runs whatever it asked
    /// for. The popup is closed unless the key left it waiting for more
    /// input.
    pub(super) fn on_modal_key(&mut self, key: KeyEvent) {
        let Some(mut modal) = self.modal.take() else {
            return;
        };
        let action = modal::handle_modal_key(&mut modal, key);
        match action {
            ModalAction::None => self.modal = Some(modal),
            ModalAction::Close => {}
            ModalAction::Delete { names } => self.run_delete(names),
            ModalAction::Create {
                name,
                shards,
                replicas,
            } => self.run_create(&name, shards, replicas),
            ModalAction::Optimize {
                names,
                max_segments,
            } => self.run_optimize(names, max_segments),
            ModalAction::Replicas { names, count } => self.run_replicas(names, count),
        }
    }

    fn run_delete(&mut self, names: Vec<String>) {
        for name in &names {
            if let Err(err) = self.client.delete_index(name) {
                self.error(format!("delete {name}: {err:#}"));
                return;
            }
        }
        self.info(format!("deleted {} indices", names.len()));
        self.refresh();
    }

    fn run_create(&mut self, name: &str, shards: i64, replicas: i64) {
        match self.client.create_index(name, shards, replicas) {
            Ok(()) => {
                self.info(format!("created {name}"));
                self.refresh();
            }
            Err(err) => self.error(format!("create {name}: {err:#}")),
        }
    }

    fn run_optimize(&mut self, names: Vec<String>, max_segments: i64) {
        for name in &names {
            if let Err(err) = self.client.optimize_index(name, max_segments) {
                self.error(format!("optimize {name}: {err:#}"));
                return;
            }
        }
        self.info(format!(
            "optimize to {max_segments} segments requested on {} indices",
            names.len()
        ));
        self.refresh();
        // tag after the refresh so the cue survives until the next one
        self.optimizing.extend(names);
    }

    fn run_replicas(&mut self, names: Vec<String>, count: i64) {
        for name in &names {
            if let Err(err) = self.client.set_replicas(name, count) {
                self.error(format!("set replicas {name}: {err:#}"));
                return;
            }
        }
        self.info(format!("replicas set to {count} on {} indices", names.len()));
        self.refresh();
    }
}

#[cfg(test)]
#[path = "../tests/console/app_tests.rs"]
mod tests;
