use crate::common::namespace::{namespace, revision_paths};
use crate::common::{add_job, analyzer_for};
use pretty_assertions::assert_eq;
use revscan::areas::store::Store;
use revscan::artifacts::items::action::{ActionKind, ActionType};
use rstest::rstest;

#[rstest]
fn ancestor_projects_contribute_labels_only(namespace: Store) {
    let analyzer = analyzer_for(namespace, None);

    add_job(&analyzer, "$/proj/sub", Some("$/proj"));
    let state = analyzer.into_state();

    let ancestor_revisions: Vec<_> = state
        .timeline()
        .revisions()
        .filter(|revision| revision.path() == "$/proj")
        .collect();
    let labels: Vec<_> = ancestor_revisions
        .iter()
        .map(|revision| match revision.action() {
            ActionKind::Label { label } => label.as_str(),
            other => panic!("unexpected ancestor action {other:?}"),
        })
        .collect();

    assert_eq!(labels, vec!["beta", "v1"]);
    assert!(
        !state
            .timeline()
            .revisions()
            .any(|revision| revision.action_type() == ActionType::Rename)
    );
    assert_eq!(
        revision_paths(&state),
        vec![
            "label $/proj",
            "add $/proj/sub",
            "create $/proj/sub/main.c",
            "add $/proj/sub/secrets",
            "create $/proj/sub/secrets/key.txt",
            "create $/proj/sub/secrets/notes.md",
            "edit $/proj/sub/main.c",
            "label $/proj",
            "destroy $/proj/sub",
            "label $/proj/sub",
        ]
    );
}

#[rstest]
fn files_directly_inside_ancestors_are_not_processed(namespace: Store) {
    let analyzer = analyzer_for(namespace, None);

    add_job(&analyzer, "$/proj/sub", Some("$/proj"));
    let state = analyzer.into_state();

    let processed: Vec<String> = state
        .processed_files()
        .sorted()
        .into_iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(processed, vec!["KEY", "MAIN", "NOTES"]);
}
