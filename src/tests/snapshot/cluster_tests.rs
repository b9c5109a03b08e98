use super::*;

fn open_line(name: &str, docs: i64, store: i64, pri_store: i64) -> String {
    format!("green open {name} 1 1 {docs} 0 {store} {pri_store}")
}

#[test]
fn entries_are_sorted_by_name() {
    let indices = [
        open_line("2015-10-12t00:00:00.000z", 10, 100, 50),
        open_line("2015-10-10t00:00:00.000z", 10, 100, 50),
        open_line("2015-10-11t00:00:00.000z", 10, 100, 50),
    ]
    .join("\n");
    let snapshot = ClusterSnapshot::parse(&indices, "", None);

    let names: Vec<&str> = snapshot.entries().iter().map(|v| v.name()).collect();
    assert_eq!(
        names,
        [
            "2015-10-10t00:00:00.000z",
            "2015-10-11t00:00:00.000z",
            "2015-10-12t00:00:00.000z",
        ]
    );
}

#[test]
fn duplicate_names_keep_the_first_row() {
    let indices = [
        open_line("logs-1", 10, 100, 50),
        open_line("logs-1", 999, 100, 50),
    ]
    .join("\n");
    let snapshot = ClusterSnapshot::parse(&indices, "", None);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.entries()[0].record.docs_count, Some(10));
    assert!(
        snapshot
            .diagnostics
            .iter()
            .any(|note| note.contains("duplicate") && note.contains("logs-1"))
    );
}

#[test]
fn malformed_lines_are_skipped_with_a_note() {
    let indices = format!(
        "{}\ngreen open broken five 1 10 0 100 50",
        open_line("logs-1", 10, 100, 50)
    );
    let snapshot = ClusterSnapshot::parse(&indices, "", None);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.entries()[0].name(), "logs-1");
    assert!(snapshot.diagnostics.iter().any(|note| note.contains("pri")));
}

#[test]
fn segments_are_joined_to_their_index_by_name() {
    let indices = [
        open_line("logs-1", 10, 100, 50),
        open_line("logs-2", 10, 100, 50),
    ]
    .join("\n");
    let segments = "\
logs-1 0 p 10.0.0.1 _0 0 5 0 100 90 true true 4.10.4 false
logs-1 0 p 10.0.0.1 _1 1 5 0 100 90 true true 4.10.4 false
logs-2 0 p 10.0.0.1 _0 0 5 0 100 90 true true 4.10.4 false";
    let snapshot = ClusterSnapshot::parse(&indices, segments, None);

    let logs1 = snapshot.get_by_name("logs-1").expect("logs-1 present");
    let logs2 = snapshot.get_by_name("logs-2").expect("logs-2 present");
    assert_eq!(logs1.segments.len(), 2);
    assert_eq!(logs2.segments.len(), 1);
    assert_eq!(logs1.segment_range(), "2");
}

#[test]
fn segments_for_unknown_indices_are_ignored() {
    let indices = open_line("logs-1", 10, 100, 50);
    let segments = "gone-1 0 p 10.0.0.1 _0 0 5 0 100 90 true true 4.10.4 false";
    let snapshot = ClusterSnapshot::parse(&indices, segments, None);

    assert_eq!(snapshot.len(), 1);
    assert!(snapshot.entries()[0].segments.is_empty());
}

#[test]
fn first_snapshot_has_unknown_activity() {
    let indices = open_line("logs-1", 10, 100, 50);
    let snapshot = ClusterSnapshot::parse(&indices, "", None);
    assert_eq!(snapshot.entries()[0].activity.summary(), "?");
}

#[test]
fn second_snapshot_classifies_against_the_first() {
    let first = ClusterSnapshot::parse(
        &[
            open_line("a", 100, 1_000, 500),
            open_line("b", 100, 1_000, 500),
            open_line("c", 100, 1_000, 500),
        ]
        .join("\n"),
        "",
        None,
    );
    let second = ClusterSnapshot::parse(
        &[
            open_line("a", 150, 1_000, 500),
            open_line("b", 100, 1_000, 300),
            open_line("c", 100, 1_000, 500),
            open_line("d", 1, 10, 10),
        ]
        .join("\n"),
        "",
        Some(&first),
    );

    let summary = |name: &str| {
        second
            .get_by_name(name)
            .map(|view| view.activity.summary())
            .expect("index present")
    };
    assert_eq!(summary("a"), "hot");
    assert_eq!(summary("b"), "merging");
    assert_eq!(summary("c"), "");
    assert_eq!(summary("d"), "?");
}

#[test]
fn removed_indices_simply_disappear() {
    let first = ClusterSnapshot::parse(
        &[open_line("a", 1, 10, 10), open_line("b", 1, 10, 10)].join("\n"),
        "",
        None,
    );
    let second = ClusterSnapshot::parse(&open_line("b", 1, 10, 10), "", Some(&first));

    assert_eq!(second.len(), 1);
    assert!(second.get_by_name("a").is_none());
}

#[test]
fn positions_refer_to_the_live_sort_order() {
    let first = ClusterSnapshot::parse(
        &[open_line("b", 1, 10, 10), open_line("c", 1, 10, 10)].join("\n"),
        "",
        None,
    );
    assert_eq!(first.get(0).expect("row 0").name(), "b");

    // an index sorting ahead of `b` shifts every position on the next parse
    let second = ClusterSnapshot::parse(
        &[
            open_line("a", 1, 10, 10),
            open_line("b", 1, 10, 10),
            open_line("c", 1, 10, 10),
        ]
        .join("\n"),
        "",
        Some(&first),
    );
    assert_eq!(second.get(0).expect("row 0").name(), "a");
}

#[test]
fn blank_lines_are_ignored() {
    let indices = format!("\n{}\n\n", open_line("logs-1", 10, 100, 50));
    let snapshot = ClusterSnapshot::parse(&indices, "\n\n", None);
    assert_eq!(snapshot.len(), 1);
    assert!(snapshot.diagnostics.is_empty());
}

#[test]
fn closed_indices_sit_alongside_open_ones() {
    let indices = format!("close 2015-08-11t00:00:00.000z\n{}", open_line("logs-1", 10, 100, 50));
    let snapshot = ClusterSnapshot::parse(&indices, "", None);

    assert_eq!(snapshot.len(), 2);
    let closed = snapshot
        .get_by_name("2015-08-11t00:00:00.000z")
        .expect("closed index present");
    assert!(closed.record.is_closed());
    assert_eq!(closed.record.docs_count, None);
}
