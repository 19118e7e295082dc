use crate::common::namespace::namespace;
use crate::common::{add_job, analyzer_for, at};
use pretty_assertions::assert_eq;
use revscan::areas::store::Store;
use rstest::rstest;

#[rstest]
fn identical_timestamps_share_a_bucket(namespace: Store) {
    let analyzer = analyzer_for(namespace, None);

    add_job(&analyzer, "$/proj/sub", None);
    let timeline = analyzer.into_state().into_timeline();

    let bucket: Vec<&str> = timeline
        .bucket(&at(30))
        .unwrap()
        .iter()
        .map(|revision| revision.path())
        .collect();

    assert_eq!(bucket, vec!["$/proj/sub", "$/proj/sub/main.c"]);
    assert_eq!(timeline.len(), 8);
    assert_eq!(timeline.bucket_count(), 6);
    assert_eq!(timeline.first_timestamp(), Some(at(30)));
    assert_eq!(timeline.last_timestamp(), Some(at(90)));
}

#[rstest]
fn buckets_are_in_ascending_timestamp_order(namespace: Store) {
    let analyzer = analyzer_for(namespace, None);

    add_job(&analyzer, "$", None);
    let timeline = analyzer.into_state().into_timeline();

    let timestamps: Vec<_> = timeline.buckets().map(|(timestamp, _)| *timestamp).collect();
    let mut sorted = timestamps.clone();
    sorted.sort();

    assert_eq!(timestamps, sorted);
}
