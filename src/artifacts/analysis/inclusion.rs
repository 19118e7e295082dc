//! Per-project inclusion decisions
//!
//! A job names a root project (the subtree migrated to the target system)
//! and walks down from a boundary project at or above that root. Every
//! project met on the way is classified on its own; the decision is not
//! inherited from the parent.

use crate::artifacts::analysis::path_matcher::PathMatcher;
use crate::artifacts::items::PROJECT_SEPARATOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inclusion {
    /// Matched an exclusion pattern; skipped with its subtree
    Excluded,
    /// Unrelated to the job's root; skipped with its subtree
    Irrelevant,
    /// Above the root; only labels are collected
    Ancestor,
    /// The root itself or inside it; fully processed
    Member,
}

#[derive(Debug, Clone)]
pub struct InclusionClassifier<'m> {
    root_path: String,
    matcher: &'m PathMatcher,
}

impl<'m> InclusionClassifier<'m> {
    pub fn new(root_path: impl Into<String>, matcher: &'m PathMatcher) -> Self {
        Self {
            root_path: root_path.into(),
            matcher,
        }
    }

    pub fn classify(&self, project_path: &str) -> Inclusion {
        if self.matcher.matches(project_path) {
            Inclusion::Excluded
        } else if path_contains(&self.root_path, project_path) {
            Inclusion::Member
        } else if path_contains(project_path, &self.root_path) {
            Inclusion::Ancestor
        } else {
            Inclusion::Irrelevant
        }
    }
}

/// Whether `path` is `outer` or lies below it
///
/// Compares whole segments, ignoring ASCII case: `$/Foo` contains
/// `$/foo/bar` but not `$/FooBar`.
pub fn path_contains(outer: &str, path: &str) -> bool {
    let outer = outer.trim_end_matches(PROJECT_SEPARATOR);
    let path = path.trim_end_matches(PROJECT_SEPARATOR);

    if path.len() < outer.len() || !path.is_char_boundary(outer.len()) {
        return false;
    }

    let (head, rest) = path.split_at(outer.len());
    head.eq_ignore_ascii_case(outer) && (rest.is_empty() || rest.starts_with(PROJECT_SEPARATOR))
}
