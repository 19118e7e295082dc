use crate::common::namespace::{namespace, revision_paths};
use crate::common::{AbortingWriter, add_job, analyzer_with_logger, id};
use pretty_assertions::assert_eq;
use revscan::areas::store::Store;
use revscan::artifacts::core::error::RegistrationError;
use revscan::artifacts::core::logger::Logger;
use rstest::rstest;
use std::sync::Arc;

#[rstest]
fn abort_mid_traversal_keeps_partial_results(namespace: Store) {
    let writer = AbortingWriter::new("Excluding file");
    let analyzer = analyzer_with_logger(
        namespace,
        Some("*/secrets/key.txt"),
        Arc::new(Logger::new(Box::new(writer.clone()))),
    );
    writer.arm(analyzer.abort_signal());

    add_job(&analyzer, "$/proj/sub", None);
    let app = analyzer.store().find_project("$/app").unwrap();
    let late = analyzer.add_item(app, Some(app));
    analyzer.wait();
    let state = analyzer.into_state();

    assert!(matches!(late, Ok(()) | Err(RegistrationError::QueueStopped)));

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
    assert!(!state.processed_files().contains(&id("NOTES")));
    assert!(state.is_destroyed(&id("OLD")));
    assert!(
        writer
            .contents()
            .contains("Revision analysis aborted in $/proj/sub")
    );
    assert!(
        !writer
            .contents()
            .contains("Building revision list for $/app")
    );
}
