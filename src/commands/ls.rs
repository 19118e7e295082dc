use crate::areas::store::{FileEntry, Flow, Project, Store, Visitor};
use crate::artifacts::items::PROJECT_SEPARATOR;
use crate::artifacts::items::physical_id::PhysicalId;
use std::collections::HashMap;
use std::io::Write;

const INDENT: &str = "  ";

#[derive(Default)]
struct TreeCollector {
    entries: Vec<(usize, String, PhysicalId, bool)>,
    file_links: HashMap<PhysicalId, usize>,
}

impl Visitor for TreeCollector {
    fn enter_project(&mut self, project: &Project) -> Flow {
        self.entries.push((
            depth(project.path()),
            format!("{}{}", project.name().logical(), PROJECT_SEPARATOR),
            project.physical().clone(),
            true,
        ));
        Flow::Continue
    }

    fn visit_file(&mut self, project: &Project, file: &FileEntry) -> Flow {
        *self.file_links.entry(file.physical().clone()).or_default() += 1;
        self.entries.push((
            depth(project.path()) + 1,
            file.logical().to_string(),
            file.physical().clone(),
            false,
        ));
        Flow::Continue
    }
}

impl Store {
    /// Print the namespace as an indented tree, marking shared files
    pub fn write_tree(&self, writer: &mut dyn Write) -> anyhow::Result<()> {
        let mut collector = TreeCollector::default();
        self.walk(self.root(), &mut collector);

        for (depth, name, physical, is_project) in &collector.entries {
            let shared = !is_project && collector.file_links.get(physical).copied() > Some(1);
            writeln!(
                writer,
                "{}{} {}{}",
                INDENT.repeat(*depth),
                name,
                physical,
                if shared { " (shared)" } else { "" }
            )?;
        }

        Ok(())
    }
}

fn depth(path: &str) -> usize {
    path.matches(PROJECT_SEPARATOR).count()
}
