use super::*;

const PRIMARY_LINE: &str =
    "2015-10-10t00:00:00.000z 0 p 10.0.0.1 _0 0 655 0 2986 2980 true true 4.10.4 false";
const REPLICA_LINE: &str =
    "2015-10-10t00:00:00.000z 0 r 10.0.0.2 _0 0 655 0 2986 2980 true true 4.10.4 false";

#[test]
fn parses_a_full_segment_row() {
    let seg = SegmentRecord::parse(PRIMARY_LINE).expect("parse row");
    assert_eq!(seg.index.as_deref(), Some("2015-10-10t00:00:00.000z"));
    assert_eq!(seg.shard, Some(0));
    assert_eq!(seg.prirep.as_deref(), Some("p"));
    assert_eq!(seg.segment.as_deref(), Some("_0"));
    assert_eq!(seg.generation, Some(0));
    assert_eq!(seg.docs_count, Some(655));
    assert_eq!(seg.size, Some(2986));
    assert_eq!(seg.committed.as_deref(), Some("true"));
    assert_eq!(seg.compound.as_deref(), Some("false"));
}

#[test]
fn committed_primary_requires_both_flags() {
    let primary = SegmentRecord::parse(PRIMARY_LINE).expect("parse row");
    assert!(primary.is_committed_primary());

    let replica = SegmentRecord::parse(REPLICA_LINE).expect("parse row");
    assert!(!replica.is_committed_primary());

    let uncommitted = SegmentRecord::parse(
        "2015-10-10t00:00:00.000z 0 p 10.0.0.1 _1 1 10 0 200 190 false true 4.10.4 false",
    )
    .expect("parse row");
    assert!(!uncommitted.is_committed_primary());
}

#[test]
fn truncated_row_is_tolerated() {
    let seg = SegmentRecord::parse("2015-10-10t00:00:00.000z 0 p").expect("parse row");
    assert_eq!(seg.shard, Some(0));
    assert_eq!(seg.committed, None);
    assert!(!seg.is_committed_primary());
}

#[test]
fn non_numeric_shard_is_malformed() {
    let err = SegmentRecord::parse("logs-1 zero p 10.0.0.1 _0 0 655 0 2986 2980 true true 4.10.4 false")
        .expect_err("must fail");
    assert!(matches!(err, CatError::MalformedField { field: "shard", .. }));
}
