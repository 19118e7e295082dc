use crate::common::namespace::{namespace, revision_paths};
use crate::common::{SharedBuffer, add_job, analyzer_for, analyzer_with_logger, id};
use pretty_assertions::assert_eq;
use revscan::areas::store::Store;
use revscan::artifacts::core::logger::Logger;
use rstest::rstest;
use std::sync::Arc;

#[rstest]
fn excluded_files_are_never_processed(namespace: Store) {
    let log = SharedBuffer::default();
    let analyzer = analyzer_with_logger(
        namespace,
        Some("*/secrets/*"),
        Arc::new(Logger::new(Box::new(log.clone()))),
    );

    add_job(&analyzer, "$/proj/sub", None);
    analyzer.wait();
    let counters = analyzer.counters().snapshot();
    let state = analyzer.into_state();

    assert_eq!(
        revision_paths(&state),
        vec![
            "add $/proj/sub",
            "create $/proj/sub/main.c",
            "edit $/proj/sub/main.c",
            "destroy $/proj/sub",
            "label $/proj/sub",
        ]
    );
    assert!(!state.processed_files().contains(&id("KEY")));
    assert!(!state.processed_files().contains(&id("NOTES")));
    assert!(state.processed_files().contains(&id("MAIN")));
    assert_eq!(counters.excluded_files, 2);
    assert_eq!(counters.files, 1);
    assert!(
        log.contents()
            .contains("Excluding file $/proj/sub/secrets/key.txt")
    );
}

#[rstest]
fn excluded_projects_are_skipped_with_their_subtree(namespace: Store) {
    let log = SharedBuffer::default();
    let analyzer = analyzer_with_logger(
        namespace,
        Some("*/sub/secrets"),
        Arc::new(Logger::new(Box::new(log.clone()))),
    );

    add_job(&analyzer, "$/proj/sub", None);
    analyzer.wait();
    let counters = analyzer.counters().snapshot();
    let state = analyzer.into_state();

    assert!(
        !revision_paths(&state)
            .iter()
            .any(|path| path.contains("secrets"))
    );
    assert_eq!(counters.projects, 1);
    assert_eq!(counters.excluded_files, 0);
    assert!(log.contents().contains("Excluding project $/proj/sub/secrets"));
}

#[rstest]
fn exclusion_patterns_ignore_case(namespace: Store) {
    let analyzer = analyzer_for(namespace, Some("*/SECRETS/*.TXT"));

    add_job(&analyzer, "$/proj/sub", None);
    let state = analyzer.into_state();

    assert!(!state.processed_files().contains(&id("KEY")));
    assert!(state.processed_files().contains(&id("NOTES")));
}
