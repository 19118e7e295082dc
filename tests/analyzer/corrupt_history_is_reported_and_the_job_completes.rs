use crate::common::{SharedBuffer, add_job, analyzer_with_logger, create, edit, id};
use pretty_assertions::assert_eq;
use revscan::areas::store::StoreBuilder;
use revscan::artifacts::core::logger::Logger;
use std::sync::Arc;

#[test]
fn corrupt_history_is_reported_and_the_job_completes() -> anyhow::Result<()> {
    let mut builder = StoreBuilder::new();
    builder
        .project("$/proj", "PROJ")?
        .file("$/proj/a.txt", "A")?
        .file("$/proj/b.txt", "B")?
        .action("A", create(10))?
        .action("A", edit(20, 2))?
        .corrupt("A", "bad crc")?
        .action("A", edit(30, 3))?
        .action("B", create(40))?;
    let log = SharedBuffer::default();
    let analyzer = analyzer_with_logger(
        builder.build(),
        None,
        Arc::new(Logger::new(Box::new(log.clone()))),
    );

    add_job(&analyzer, "$/proj", None);
    analyzer.wait();
    let errors = analyzer.reported_errors();
    let state = analyzer.into_state();

    let a_versions: Vec<u32> = state
        .timeline()
        .revisions()
        .filter(|revision| revision.item().physical() == &id("A"))
        .map(|revision| revision.version())
        .collect();

    assert_eq!(a_versions, vec![1, 2]);
    assert!(state.processed_files().contains(&id("B")));
    assert_eq!(state.timeline().len(), 3);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("$/proj/a.txt"));
    assert!(errors[0].contains("bad crc"));
    assert!(log.contents().contains("ERROR:"));
    assert!(log.contents().contains("Analysis totals:"));

    Ok(())
}
