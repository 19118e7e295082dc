use crate::common::namespace::namespace;
use crate::common::{add_job, analyzer_for, id};
use pretty_assertions::assert_eq;
use revscan::areas::store::Store;
use revscan::artifacts::items::action::ActionType;
use rstest::rstest;

#[rstest]
fn destroy_on_an_ancestor_is_tracked_but_not_recorded(namespace: Store) {
    let analyzer = analyzer_for(namespace, None);

    add_job(&analyzer, "$/proj/sub/secrets", Some("$/proj"));
    let state = analyzer.into_state();

    assert!(state.is_destroyed(&id("OLD")));
    assert_eq!(state.destroyed_items().len(), 1);
    assert!(
        !state
            .timeline()
            .revisions()
            .any(|revision| revision.action_type() == ActionType::Destroy)
    );
}

#[rstest]
fn destroy_of_an_excluded_target_is_tracked_but_not_recorded(namespace: Store) {
    let analyzer = analyzer_for(namespace, Some("*/old.c"));

    add_job(&analyzer, "$/proj/sub", None);
    let state = analyzer.into_state();

    assert!(state.is_destroyed(&id("OLD")));
    assert!(
        !state
            .timeline()
            .revisions()
            .any(|revision| revision.action_type() == ActionType::Destroy)
    );
}
