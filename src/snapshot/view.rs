use std::collections::{BTreeMap, BTreeSet};

use time::OffsetDateTime;

use crate::cat::{IndexRecord, SegmentRecord};

use super::activity::Activity;
use super::age::index_age_days;
use super::bytes::format_bytes;

/// One index joined with its segment rows and diffed against the previous
/// snapshot. This is the unit the console lists, selects, and operates on.
#[derive(Clone, Debug)]
pub struct IndexView {
    pub record: IndexRecord,
    pub segments: Vec<SegmentRecord>,
    pub activity: Activity,
}

impl IndexView {
    pub(super) fn build(
        record: IndexRecord,
        segments: Vec<SegmentRecord>,
        prev: Option<&IndexView>,
    ) -> Self {
        let activity = Activity::classify(prev.map(|p| &p.record), &record);
        Self {
            record,
            segments,
            activity,
        }
    }

    pub fn name(&self) -> &str {
        self.record.index.as_deref().unwrap_or_default()
    }

    /// Age of the index in whole days, read from its time-bucketed name;
    /// `-1` when the name carries no timestamp.
    pub fn age_days(&self, now: OffsetDateTime) -> i64 {
        index_age_days(self.name(), now)
    }

    /// Spread of committed primary segment counts across this index's
    /// shards: empty when no shard qualifies, the bare count when uniform,
    /// `"min - max"` otherwise.
    pub fn segment_range(&self) -> String {
        let mut per_shard: BTreeMap<i64, usize> = BTreeMap::new();
        for seg in &self.segments {
            if !seg.is_committed_primary() {
                continue;
            }
            let Some(shard) = seg.shard else {
                continue;
            };
            *per_shard.entry(shard).or_insert(0) += 1;
        }

        let counts: BTreeSet<usize> = per_shard.values().copied().collect();
        let mut ordered = counts.iter();
        match (ordered.next(), ordered.next_back()) {
            (None, _) => String::new(),
            (Some(only), None) => only.to_string(),
            (Some(min), Some(max)) => format!("{min} - {max}"),
        }
    }

    pub fn store_size_human(&self) -> String {
        format_bytes(self.record.store_size)
    }

    pub fn pri_store_size_human(&self) -> String {
        format_bytes(self.record.pri_store_size)
    }

    /// The twelve display values for this row, in `ClusterSnapshot::COLUMNS`
    /// order. Absent columns render as empty strings.
    pub fn cells(&self, now: OffsetDateTime) -> [String; 12] {
        let record = &self.record;
        [
            record.health.clone().unwrap_or_default(),
            record.status.clone().unwrap_or_default(),
            self.name().to_string(),
            opt_num(record.pri),
            opt_num(record.rep),
            opt_num(record.docs_count),
            opt_num(record.docs_deleted),
            self.store_size_human(),
            self.pri_store_size_human(),
            self.age_days(now).to_string(),
            self.segment_range(),
            self.activity.summary().to_string(),
        ]
    }
}

fn opt_num(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

#[cfg(test)]
#[path = "../tests/snapshot/view_tests.rs"]
mod tests;
