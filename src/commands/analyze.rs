use crate::areas::analyzer::{AnalyzerOptions, RevisionAnalyzer};
use crate::areas::manifest;
use crate::areas::store::{ProjectRef, Store};
use crate::artifacts::analysis::counters::CounterSnapshot;
use crate::artifacts::analysis::state::AnalysisState;
use crate::artifacts::core::logger::Logger;
use crate::artifacts::revision::Revision;
use derive_new::new;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, new)]
pub struct AnalyzeOptions {
    pub manifest: PathBuf,
    pub roots: Vec<String>,
    pub boundary: Option<String>,
    pub exclude: Option<String>,
}

/// Run one job per root over the manifest's namespace and print the result
///
/// Each root is migrated from `boundary` when one is given, otherwise from
/// the root itself.
pub fn analyze(
    options: &AnalyzeOptions,
    logger: Arc<Logger>,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let store = Arc::new(manifest::load(&options.manifest)?);
    let analyzer = RevisionAnalyzer::new(AnalyzerOptions::new(
        Arc::clone(&store),
        logger,
        options.exclude.clone(),
    ))?;

    let boundary = options
        .boundary
        .as_deref()
        .map(|path| resolve_project(&store, path))
        .transpose()?;
    for root_path in &options.roots {
        let root = resolve_project(&store, root_path)?;
        analyzer.add_item(root, Some(boundary.unwrap_or(root)))?;
    }

    analyzer.wait();
    let counters = analyzer.counters().snapshot();
    let errors = analyzer.reported_errors();
    let state = analyzer.into_state();

    state.write_report(&store, counters, &errors, writer)
}

fn resolve_project(store: &Store, path: &str) -> anyhow::Result<ProjectRef> {
    store
        .find_project(path)
        .ok_or_else(|| anyhow::anyhow!("project {} not found", path))
}

impl AnalysisState {
    pub fn write_report(
        &self,
        store: &Store,
        counters: CounterSnapshot,
        errors: &[String],
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let roots = self
            .root_projects()
            .iter()
            .filter_map(|root| store.project(*root))
            .map(|root| root.path())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(writer, "Timeline for {roots}")?;

        for revision in self.timeline().revisions() {
            write_revision(revision, writer)?;
        }

        let destroyed = self
            .destroyed_items()
            .sorted()
            .into_iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        if destroyed.is_empty() {
            writeln!(writer, "Destroyed items: none")?;
        } else {
            writeln!(writer, "Destroyed items: {}", destroyed.join(", "))?;
        }

        writeln!(writer, "Totals: {counters}")?;
        writeln!(writer, "Errors: {}", errors.len())?;

        Ok(())
    }
}

fn write_revision(revision: &Revision, writer: &mut dyn Write) -> anyhow::Result<()> {
    write!(
        writer,
        "{} {} {} {}",
        revision.timestamp().format(TIMESTAMP_FORMAT),
        revision.author(),
        revision.action_type(),
        revision.path()
    )?;
    if let Some(target) = revision.action().target() {
        write!(writer, " [{}]", target.logical())?;
    }
    write!(writer, " v{}", revision.version())?;
    if let Some(comment) = revision.comment() {
        write!(writer, " -- {comment}")?;
    }
    writeln!(writer)?;

    Ok(())
}
