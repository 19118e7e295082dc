//! Read-only namespace store
//!
//! The store holds the project tree and the action log of every physical
//! item. Projects are never shared, but a file's physical record may be
//! reachable from several projects, so action logs are kept per physical
//! identifier rather than per tree entry.
//!
//! ## Traversal
//!
//! [`Store::walk`] visits the tree in pre-order. A project is entered before
//! any of its children, and its children (files and sub-projects) follow in
//! the order they were declared. Each callback steers the walk with a
//! [`Flow`]:
//!
//! - `Continue`: keep going
//! - `Skip`: from `enter_project`, do not descend into that project
//! - `Abort`: stop the whole walk immediately

use crate::artifacts::core::error::RecordError;
use crate::artifacts::items::action::{Action, ItemName};
use crate::artifacts::items::physical_id::PhysicalId;
use crate::artifacts::items::{PROJECT_SEPARATOR, ROOT_PROJECT_PATH};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a store instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreId(u64);

/// Handle to a project of a particular store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectRef {
    store: StoreId,
    index: usize,
}

impl ProjectRef {
    pub fn store(&self) -> StoreId {
        self.store
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Skip,
    Abort,
}

pub trait Visitor {
    fn enter_project(&mut self, project: &Project) -> Flow;

    fn visit_file(&mut self, project: &Project, file: &FileEntry) -> Flow;
}

#[derive(Debug, Clone)]
enum Child {
    Project(usize),
    File(FileEntry),
}

#[derive(Debug, Clone)]
pub struct Project {
    handle: ProjectRef,
    name: ItemName,
    path: String,
    children: Vec<Child>,
}

impl Project {
    pub fn handle(&self) -> ProjectRef {
        self.handle
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn physical(&self) -> &PhysicalId {
        self.name.physical()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn files(&self) -> impl Iterator<Item = &FileEntry> {
        self.children.iter().filter_map(|child| match child {
            Child::File(file) => Some(file),
            Child::Project(_) => None,
        })
    }
}

/// A file as it appears inside one project
#[derive(Debug, Clone)]
pub struct FileEntry {
    name: ItemName,
}

impl FileEntry {
    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn physical(&self) -> &PhysicalId {
        self.name.physical()
    }

    pub fn logical(&self) -> &str {
        self.name.logical()
    }

    /// Full logical path of the file when reached through `project`
    pub fn path_in(&self, project: &Project) -> String {
        format!("{}{}{}", project.path(), PROJECT_SEPARATOR, self.logical())
    }
}

#[derive(Debug, Clone)]
enum ActionRecord {
    Decoded(Action),
    Corrupt(String),
}

#[derive(Debug)]
pub struct Store {
    id: StoreId,
    projects: Vec<Project>,
    project_paths: HashMap<String, usize>,
    histories: HashMap<PhysicalId, Vec<ActionRecord>>,
}

impl Store {
    pub fn id(&self) -> StoreId {
        self.id
    }

    pub fn root(&self) -> ProjectRef {
        self.projects[0].handle
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Resolve a handle, or `None` if it belongs to another store
    pub fn project(&self, project: ProjectRef) -> Option<&Project> {
        if project.store != self.id {
            return None;
        }

        self.projects.get(project.index)
    }

    pub fn find_project(&self, path: &str) -> Option<ProjectRef> {
        let key = path_key(path.trim_end_matches(PROJECT_SEPARATOR));

        self.project_paths
            .get(&key)
            .map(|index| self.projects[*index].handle)
    }

    /// Read the action log of an item
    ///
    /// The log yields actions in recorded order and ends after the first
    /// record that cannot be decoded.
    pub fn actions<'s>(&'s self, item: &'s ItemName) -> ActionLog<'s> {
        let records = self
            .histories
            .get(item.physical())
            .map(Vec::as_slice)
            .unwrap_or_default();

        ActionLog {
            physical: item.physical(),
            records: records.iter().enumerate(),
            failed: false,
        }
    }

    /// Walk the subtree of `start` in pre-order
    ///
    /// Returns `Abort` if a callback aborted, `Skip` if `start` itself was
    /// skipped, and `Continue` otherwise. A handle from another store is
    /// treated as skipped.
    pub fn walk(&self, start: ProjectRef, visitor: &mut dyn Visitor) -> Flow {
        match self.project(start) {
            Some(project) => self.walk_project(project, visitor),
            None => Flow::Skip,
        }
    }

    fn walk_project(&self, project: &Project, visitor: &mut dyn Visitor) -> Flow {
        match visitor.enter_project(project) {
            Flow::Continue => {}
            flow => return flow,
        }

        for child in &project.children {
            let flow = match child {
                Child::File(file) => visitor.visit_file(project, file),
                Child::Project(index) => self.walk_project(&self.projects[*index], visitor),
            };

            if flow == Flow::Abort {
                return Flow::Abort;
            }
        }

        Flow::Continue
    }
}

pub struct ActionLog<'s> {
    physical: &'s PhysicalId,
    records: std::iter::Enumerate<std::slice::Iter<'s, ActionRecord>>,
    failed: bool,
}

impl Iterator for ActionLog<'_> {
    type Item = Result<Action, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.records.next()? {
            (_, ActionRecord::Decoded(action)) => Some(Ok(action.clone())),
            (index, ActionRecord::Corrupt(reason)) => {
                self.failed = true;
                Some(Err(RecordError::new(
                    self.physical.clone(),
                    index,
                    reason.clone(),
                )))
            }
        }
    }
}

/// Assembles a [`Store`]
///
/// The root project `$` always exists. Parents must be declared before
/// their children; paths are matched ignoring ASCII case.
#[derive(Debug)]
pub struct StoreBuilder {
    id: StoreId,
    projects: Vec<Project>,
    project_paths: HashMap<String, usize>,
    project_physicals: HashSet<PhysicalId>,
    file_physicals: HashSet<PhysicalId>,
    file_paths: HashSet<String>,
    histories: HashMap<PhysicalId, Vec<ActionRecord>>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        let physical = PhysicalId::root();
        let id = StoreId(NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed));
        let root = Project {
            handle: ProjectRef { store: id, index: 0 },
            name: ItemName::new(physical.clone(), ROOT_PROJECT_PATH.to_string()),
            path: ROOT_PROJECT_PATH.to_string(),
            children: Vec::new(),
        };

        StoreBuilder {
            id,
            projects: vec![root],
            project_paths: HashMap::from([(path_key(ROOT_PROJECT_PATH), 0)]),
            project_physicals: HashSet::from([physical]),
            file_physicals: HashSet::new(),
            file_paths: HashSet::new(),
            histories: HashMap::new(),
        }
    }

    /// Declare a project below an already declared parent project
    pub fn project(&mut self, path: &str, physical: &str) -> anyhow::Result<&mut Self> {
        let physical = PhysicalId::try_parse(physical)?;
        let (parent, logical) = self.split_path(path)?;
        let key = path_key(path);

        if self.project_paths.contains_key(&key) || self.file_paths.contains(&key) {
            anyhow::bail!("path {} is already declared", path);
        }
        if self.file_physicals.contains(&physical) {
            anyhow::bail!("project {} cannot use file physical id {}", path, physical);
        }
        if !self.project_physicals.insert(physical.clone()) {
            anyhow::bail!("project {} cannot share physical id {}", path, physical);
        }

        let index = self.projects.len();
        let parent_path = self.projects[parent].path.clone();
        self.projects.push(Project {
            handle: ProjectRef {
                store: self.id,
                index,
            },
            name: ItemName::new(physical, logical.to_string()),
            path: format!("{parent_path}{PROJECT_SEPARATOR}{logical}"),
            children: Vec::new(),
        });
        self.projects[parent].children.push(Child::Project(index));
        self.project_paths.insert(key, index);

        Ok(self)
    }

    /// Declare a file inside an already declared project
    ///
    /// Declaring the same physical id in several projects shares the file.
    pub fn file(&mut self, path: &str, physical: &str) -> anyhow::Result<&mut Self> {
        let physical = PhysicalId::try_parse(physical)?;
        let (parent, logical) = self.split_path(path)?;
        let key = path_key(path);

        if self.project_physicals.contains(&physical) {
            anyhow::bail!("file {} cannot use project physical id {}", path, physical);
        }
        if self.project_paths.contains_key(&key) || !self.file_paths.insert(key) {
            anyhow::bail!("path {} is already declared", path);
        }

        self.file_physicals.insert(physical.clone());
        self.projects[parent].children.push(Child::File(FileEntry {
            name: ItemName::new(physical, logical.to_string()),
        }));

        Ok(self)
    }

    /// Append an action to the log of a physical item
    pub fn action(&mut self, physical: &str, action: Action) -> anyhow::Result<&mut Self> {
        let physical = PhysicalId::try_parse(physical)?;
        self.histories
            .entry(physical)
            .or_default()
            .push(ActionRecord::Decoded(action));

        Ok(self)
    }

    /// Append an undecodable record to the log of a physical item
    pub fn corrupt(&mut self, physical: &str, reason: &str) -> anyhow::Result<&mut Self> {
        let physical = PhysicalId::try_parse(physical)?;
        self.histories
            .entry(physical)
            .or_default()
            .push(ActionRecord::Corrupt(reason.to_string()));

        Ok(self)
    }

    pub fn build(self) -> Store {
        Store {
            id: self.id,
            projects: self.projects,
            project_paths: self.project_paths,
            histories: self.histories,
        }
    }

    fn split_path<'p>(&self, path: &'p str) -> anyhow::Result<(usize, &'p str)> {
        let (parent_path, logical) = path
            .rsplit_once(PROJECT_SEPARATOR)
            .ok_or_else(|| anyhow::anyhow!("path {} has no parent project", path))?;

        if logical.is_empty() {
            anyhow::bail!("path {} has an empty name", path);
        }

        let parent = self
            .project_paths
            .get(&path_key(parent_path))
            .copied()
            .ok_or_else(|| anyhow::anyhow!("parent project {} is not declared", parent_path))?;

        Ok((parent, logical))
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn path_key(path: &str) -> String {
    path.to_ascii_lowercase()
}
