use crate::common::namespace::namespace;
use crate::common::{add_job, analyzer_for, id};
use pretty_assertions::assert_eq;
use revscan::areas::store::Store;
use rstest::rstest;

#[rstest]
fn sibling_projects_with_a_common_prefix_are_not_visited(namespace: Store) {
    let analyzer = analyzer_for(namespace, None);

    add_job(&analyzer, "$/proj/sub", Some("$/proj"));
    analyzer.wait();
    let projects = analyzer.counters().projects();
    let state = analyzer.into_state();

    assert_eq!(projects, 3);
    assert!(!state.processed_files().contains(&id("MAP")));
    assert!(
        !state
            .timeline()
            .revisions()
            .any(|revision| revision.path().starts_with("$/proj/subway"))
    );
}
