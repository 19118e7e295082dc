use crate::common::namespace::namespace;
use crate::common::{add_job, analyzer_for};
use pretty_assertions::assert_eq;
use revscan::areas::store::Store;
use revscan::artifacts::core::error::RegistrationError;
use rstest::rstest;

#[rstest]
fn registration_after_abort_is_rejected(namespace: Store) {
    let analyzer = analyzer_for(namespace, None);
    let root = analyzer.store().find_project("$/proj").unwrap();

    analyzer.abort();
    let result = analyzer.add_item(root, Some(root));
    analyzer.wait();

    assert_eq!(result, Err(RegistrationError::QueueStopped));
    assert!(analyzer.is_aborting());
    assert_eq!(analyzer.pending_jobs(), 0);
    assert_eq!(analyzer.counters().projects(), 0);
    assert!(analyzer.root_projects().is_empty());

    let state = analyzer.into_state();

    assert!(state.timeline().is_empty());
    assert!(state.processed_files().is_empty());
    assert!(state.root_projects().is_empty());
}

#[rstest]
fn jobs_registered_before_the_abort_stay_listed(namespace: Store) {
    let analyzer = analyzer_for(namespace, None);
    add_job(&analyzer, "$/app", None);
    analyzer.wait();

    analyzer.abort();
    let root = analyzer.store().find_project("$/proj").unwrap();

    assert_eq!(
        analyzer.add_item(root, Some(root)),
        Err(RegistrationError::QueueStopped)
    );

    let state = analyzer.into_state();

    assert_eq!(state.root_projects().len(), 1);
    assert!(!state.timeline().is_empty());
}
