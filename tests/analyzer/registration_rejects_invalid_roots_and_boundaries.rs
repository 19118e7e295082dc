use crate::common::analyzer_for;
use crate::common::namespace::namespace;
use pretty_assertions::assert_eq;
use revscan::areas::store::{Store, StoreBuilder};
use revscan::artifacts::core::error::RegistrationError;
use rstest::rstest;

#[rstest]
fn a_missing_boundary_is_rejected(namespace: Store) {
    let analyzer = analyzer_for(namespace, None);
    let root = analyzer.store().find_project("$/proj").unwrap();

    let result = analyzer.add_item(root, None);

    assert_eq!(result, Err(RegistrationError::MissingBoundary));
    assert_eq!(analyzer.pending_jobs(), 0);
    assert!(analyzer.root_projects().is_empty());
}

#[rstest]
fn projects_of_another_store_are_rejected(namespace: Store) {
    let analyzer = analyzer_for(namespace, None);
    let root = analyzer.store().find_project("$/proj").unwrap();
    let mut other = StoreBuilder::new();
    other.project("$/proj", "PROJ").unwrap();
    let other = other.build();
    let foreign = other.find_project("$/proj").unwrap();

    assert_eq!(
        analyzer.add_item(root, Some(foreign)),
        Err(RegistrationError::ForeignBoundary)
    );
    assert_eq!(
        analyzer.add_item(foreign, Some(root)),
        Err(RegistrationError::ForeignRoot)
    );
    assert!(analyzer.root_projects().is_empty());
}

#[rstest]
fn a_boundary_outside_the_root_ancestry_is_rejected(namespace: Store) {
    let analyzer = analyzer_for(namespace, None);
    let root = analyzer.store().find_project("$/proj/sub").unwrap();
    let boundary = analyzer.store().find_project("$/proj/subway").unwrap();

    let result = analyzer.add_item(root, Some(boundary));

    assert_eq!(
        result,
        Err(RegistrationError::UnrelatedBoundary {
            root: "$/proj/sub".to_string(),
            boundary: "$/proj/subway".to_string(),
        })
    );
}

#[rstest]
fn a_boundary_may_be_the_root_itself(namespace: Store) {
    let analyzer = analyzer_for(namespace, None);
    let root = analyzer.store().find_project("$/proj").unwrap();

    assert_eq!(analyzer.add_item(root, Some(root)), Ok(()));
    analyzer.wait();

    assert_eq!(analyzer.root_projects(), vec![root]);
}
