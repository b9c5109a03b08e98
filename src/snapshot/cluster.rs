use std::collections::{HashMap, HashSet};

use crate::cat::{IndexRecord, SegmentRecord};

use super::view::IndexView;

/// A point-in-time parse of the cluster's index and segment tables, sorted
/// by index name. Rebuilt wholesale on every refresh; never mutated in
/// place.
#[derive(Clone, Debug, Default)]
pub struct ClusterSnapshot {
    entries: Vec<IndexView>,
    /// Human-readable notes about lines the parse skipped or collapsed.
    pub diagnostics: Vec<String>,
}

impl ClusterSnapshot {
    /// Display columns, in render order. Kept stable so the console header
    /// and the one-shot reports agree on what a row means.
    pub const COLUMNS: [&'static str; 12] = [
        "health",
        "status",
        "index",
        "pri",
        "rep",
        "docs",
        "del",
        "size",
        "pri.size",
        "age",
        "segs",
        "activity",
    ];

    /// Lays out one row with the fixed column widths shared by the console
    /// table and the one-shot report.
    pub fn layout_row(cells: &[&str; 12]) -> String {
        format!(
            "{:<7} {:<6} {:<26} {:>4} {:>4} {:>9} {:>7} {:>8} {:>10} {:>4} {:>8}  {:<8}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            cells[4],
            cells[5],
            cells[6],
            cells[7],
            cells[8],
            cells[9],
            cells[10],
            cells[11],
        )
    }

    pub fn header_line() -> String {
        Self::layout_row(&Self::COLUMNS)
    }

    /// Parses the two raw table dumps into a snapshot, pairing each index
    /// with its previous appearance in `prev` (by name) to derive activity.
    ///
    /// Rows that fail to type-check are skipped with a diagnostic instead
    /// of failing the whole snapshot. When the same index name appears
    /// twice, the first row wins and the duplicate is noted.
    pub fn parse(indices_text: &str, segments_text: &str, prev: Option<&Self>) -> Self {
        let mut diagnostics = Vec::new();

        let mut segments_by_index: HashMap<String, Vec<SegmentRecord>> = HashMap::new();
        for line in non_blank_lines(segments_text) {
            match SegmentRecord::parse(line) {
                Ok(seg) => {
                    let Some(name) = seg.index.clone() else {
                        continue;
                    };
                    segments_by_index.entry(name).or_default().push(seg);
                }
                Err(err) => diagnostics.push(format!("segments: {err} in `{line}`")),
            }
        }

        let mut records: Vec<IndexRecord> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for line in non_blank_lines(indices_text) {
            match IndexRecord::parse(line) {
                Ok(record) => {
                    let Some(name) = record.index.clone() else {
                        diagnostics.push(format!("indices: row without a name in `{line}`"));
                        continue;
                    };
                    if !seen.insert(name.clone()) {
                        diagnostics.push(format!("indices: duplicate `{name}`, keeping first"));
                        continue;
                    }
                    records.push(record);
                }
                Err(err) => diagnostics.push(format!("indices: {err} in `{line}`")),
            }
        }

        records.sort_by(|a, b| a.index.cmp(&b.index));

        let entries = records
            .into_iter()
            .map(|record| {
                let segments = record
                    .index
                    .as_deref()
                    .and_then(|name| segments_by_index.remove(name))
                    .unwrap_or_default();
                let prev_view = record
                    .index
                    .as_deref()
                    .and_then(|name| prev.and_then(|p| p.get_by_name(name)));
                IndexView::build(record, segments, prev_view)
            })
            .collect();

        Self {
            entries,
            diagnostics,
        }
    }

    pub fn entries(&self) -> &[IndexView] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&IndexView> {
        self.entries.get(position)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&IndexView> {
        // entries are sorted by name, so a binary search suffices
        self.entries
            .binary_search_by(|view| view.name().cmp(name))
            .ok()
            .map(|i| &self.entries[i])
    }
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}

#[cfg(test)]
#[path = "../tests/snapshot/cluster_tests.rs"]
mod tests;
