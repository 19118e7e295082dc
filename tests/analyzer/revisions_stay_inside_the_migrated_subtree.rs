use crate::common::namespace::namespace;
use crate::common::{add_job, analyzer_for};
use revscan::areas::store::Store;
use revscan::artifacts::analysis::inclusion::path_contains;
use revscan::artifacts::items::action::ActionType;
use rstest::rstest;

#[rstest]
#[case("$/proj/sub", "$")]
#[case("$/proj/sub", "$/proj")]
#[case("$/proj/sub/secrets", "$/proj")]
#[case("$/app", "$")]
fn revisions_stay_inside_the_migrated_subtree(
    namespace: Store,
    #[case] root: &str,
    #[case] boundary: &str,
) {
    let analyzer = analyzer_for(namespace, None);

    add_job(&analyzer, root, Some(boundary));
    let state = analyzer.into_state();

    assert!(!state.timeline().is_empty());
    for revision in state.timeline().revisions() {
        let inside = path_contains(root, revision.path());
        let inherited_label =
            revision.action_type() == ActionType::Label && path_contains(revision.path(), root);

        assert!(
            inside || inherited_label,
            "{} {} escaped {}",
            revision.action_type(),
            revision.path(),
            root
        );
    }
}
