use crate::cat::IndexRecord;

/// Activity flags derived by diffing an index against its appearance in the
/// previous snapshot. Each flag is `None` when there was no previous record
/// to compare with, which renders as `?`.
///
/// The three set states are mutually exclusive by construction: document
/// growth wins over primary-store movement, which wins over total-store
/// movement. Equality is on `Option<i64>`, so a column missing on both
/// sides compares equal rather than poisoning the diff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Activity {
    pub hot: Option<bool>,
    pub merging: Option<bool>,
    pub replicating: Option<bool>,
}

impl Activity {
    pub fn classify(prev: Option<&IndexRecord>, current: &IndexRecord) -> Self {
        let Some(prev) = prev else {
            return Self::default();
        };
        let docs_equal = prev.docs_count == current.docs_count;
        let pri_equal = prev.pri_store_size == current.pri_store_size;
        let store_equal = prev.store_size == current.store_size;
        Self {
            hot: Some(!docs_equal),
            merging: Some(docs_equal && !pri_equal),
            replicating: Some(docs_equal && pri_equal && !store_equal),
        }
    }

    pub fn hot_label(&self) -> &'static str {
        label(self.hot, "hot")
    }

    pub fn merging_label(&self) -> &'static str {
        label(self.merging, "merging")
    }

    pub fn replicating_label(&self) -> &'static str {
        label(self.replicating, "rep")
    }

    /// Single-cell summary: the one active label, `?` when unknown, empty
    /// when idle.
    pub fn summary(&self) -> &'static str {
        if self.hot.is_none() {
            return "?";
        }
        if self.hot == Some(true) {
            "hot"
        } else if self.merging == Some(true) {
            "merging"
        } else if self.replicating == Some(true) {
            "rep"
        } else {
            ""
        }
    }
}

fn label(flag: Option<bool>, name: &'static str) -> &'static str {
    match flag {
        None => "?",
        Some(true) => name,
        Some(false) => "",
    }
}

#[cfg(test)]
#[path = "../tests/snapshot/activity_tests.rs"]
mod tests;
