use std::collections::BTreeSet;

/// Cursor position and marked rows, both indexing into the live snapshot's
/// sort order. The whole struct is replaced on refresh, so positions never
/// leak across snapshots whose ordering may differ.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    marked: BTreeSet<usize>,
    cursor: usize,
}

impl SelectionState {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
    }

    pub fn cursor_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let moved = self.cursor.saturating_add_signed(delta);
        self.cursor = moved.min(len - 1);
    }

    /// Marks the position if unmarked, unmarks it otherwise.
    pub fn toggle(&mut self, position: usize) {
        if !self.marked.remove(&position) {
            self.marked.insert(position);
        }
    }

    pub fn clear(&mut self) {
        self.marked.clear();
    }

    pub fn is_marked(&self, position: usize) -> bool {
        self.marked.contains(&position)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Marked positions in ascending order.
    pub fn marked(&self) -> impl Iterator<Item = usize> + '_ {
        self.marked.iter().copied()
    }
}

#[cfg(test)]
#[path = "../tests/console/selection_tests.rs"]
mod tests;
