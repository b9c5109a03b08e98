use super::row::{CatError, parse_row, take_num, take_text};

/// Column order of `/_cat/segments`, also queried with `bytes=b`.
pub const SEGMENT_HEADERS: [&str; 14] = [
    "index",
    "shard",
    "prirep",
    "ip",
    "segment",
    "generation",
    "docs_count",
    "docs_deleted",
    "size",
    "size_memory",
    "committed",
    "searchable",
    "version",
    "compound",
];

const INT_FIELDS: [&str; 6] = [
    "shard",
    "generation",
    "docs_count",
    "docs_deleted",
    "size",
    "size_memory",
];

/// One row of the segment table: a single Lucene segment of one shard copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentRecord {
    pub index: Option<String>,
    pub shard: Option<i64>,
    pub prirep: Option<String>,
    pub ip: Option<String>,
    pub segment: Option<String>,
    pub generation: Option<i64>,
    pub docs_count: Option<i64>,
    pub docs_deleted: Option<i64>,
    pub size: Option<i64>,
    pub size_memory: Option<i64>,
    pub committed: Option<String>,
    pub searchable: Option<String>,
    pub version: Option<String>,
    pub compound: Option<String>,
}

impl SegmentRecord {
    pub fn parse(line: &str) -> Result<Self, CatError> {
        let mut row = parse_row(line, &SEGMENT_HEADERS, &INT_FIELDS)?;
        Ok(Self {
            index: take_text(&mut row, "index"),
            shard: take_num(&mut row, "shard"),
            prirep: take_text(&mut row, "prirep"),
            ip: take_text(&mut row, "ip"),
            segment: take_text(&mut row, "segment"),
            generation: take_num(&mut row, "generation"),
            docs_count: take_num(&mut row, "docs_count"),
            docs_deleted: take_num(&mut row, "docs_deleted"),
            size: take_num(&mut row, "size"),
            size_memory: take_num(&mut row, "size_memory"),
            committed: take_text(&mut row, "committed"),
            searchable: take_text(&mut row, "searchable"),
            version: take_text(&mut row, "version"),
            compound: take_text(&mut row, "compound"),
        })
    }

    /// Segments that count toward the per-shard totals shown in the console:
    /// primary copies whose segment is committed to disk.
    pub fn is_committed_primary(&self) -> bool {
        self.prirep.as_deref() == Some("p") && self.committed.as_deref() == Some("true")
    }
}

#[cfg(test)]
#[path = "../tests/cat/segments_tests.rs"]
mod tests;
