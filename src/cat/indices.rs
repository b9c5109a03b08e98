use super::row::{CatError, parse_row, take_num, take_text};

/// Column order of `/_cat/indices` on the clusters we target. The endpoint
/// is queried with `bytes=b`, so the size columns arrive as plain integers.
pub const INDEX_HEADERS: [&str; 9] = [
    "health",
    "status",
    "index",
    "pri",
    "rep",
    "docs_count",
    "docs_deleted",
    "store_size",
    "pri_store_size",
];

const INT_FIELDS: [&str; 6] = [
    "pri",
    "rep",
    "docs_count",
    "docs_deleted",
    "store_size",
    "pri_store_size",
];

/// One row of the index table. Every column is optional: closed indices
/// report only `status` and `index`, and a degraded cluster can truncate
/// rows mid-line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexRecord {
    pub health: Option<String>,
    pub status: Option<String>,
    pub index: Option<String>,
    pub pri: Option<i64>,
    pub rep: Option<i64>,
    pub docs_count: Option<i64>,
    pub docs_deleted: Option<i64>,
    pub store_size: Option<i64>,
    pub pri_store_size: Option<i64>,
}

impl IndexRecord {
    pub fn parse(line: &str) -> Result<Self, CatError> {
        let mut row = parse_row(line, &INDEX_HEADERS, &INT_FIELDS)?;
        Ok(Self {
            health: take_text(&mut row, "health"),
            status: take_text(&mut row, "status"),
            index: take_text(&mut row, "index"),
            pri: take_num(&mut row, "pri"),
            rep: take_num(&mut row, "rep"),
            docs_count: take_num(&mut row, "docs_count"),
            docs_deleted: take_num(&mut row, "docs_deleted"),
            store_size: take_num(&mut row, "store_size"),
            pri_store_size: take_num(&mut row, "pri_store_size"),
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.index.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.status.as_deref() == Some("close")
    }
}

#[cfg(test)]
#[path = "../tests/cat/indices_tests.rs"]
mod tests;
