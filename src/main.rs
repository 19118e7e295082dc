use anyhow::Result;
use clap::{Parser, Subcommand};
use revscan::areas::manifest;
use revscan::artifacts::core::logger::Logger;
use revscan::commands::analyze::{AnalyzeOptions, analyze};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "revscan",
    version = "0.1.0",
    about = "Reconstruct the revision timeline of a versioned namespace",
    long_about = "This tool walks a hierarchical namespace of versioned projects and files \
    and folds the recorded history of the selected subtrees into a single, \
    time-ordered list of revisions, ready to be grouped into changesets.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, global = true, help = "Log diagnostics to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "analyze",
        about = "Build the revision timeline of one or more projects",
        long_about = "This command runs one migration job per root project and prints \
        the resulting timeline. Labels applied to projects between the boundary \
        and a root are inherited by that root."
    )]
    Analyze {
        #[arg(index = 1, help = "The namespace manifest")]
        manifest: PathBuf,
        #[arg(long = "root", required = true, help = "A project to migrate (repeatable)")]
        roots: Vec<String>,
        #[arg(long, help = "Ancestor project to collect inherited labels from")]
        boundary: Option<String>,
        #[arg(
            long,
            env = "REVSCAN_EXCLUDE",
            help = "Semicolon-delimited exclusion patterns"
        )]
        exclude: Option<String>,
    },
    #[command(
        name = "ls",
        about = "List the namespace tree of a manifest",
        long_about = "This command prints every project and file of the manifest, \
        marking files shared into more than one project."
    )]
    Ls {
        #[arg(index = 1, help = "The namespace manifest")]
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Analyze {
            manifest,
            roots,
            boundary,
            exclude,
        } => {
            let options = AnalyzeOptions::new(
                manifest.clone(),
                roots.clone(),
                boundary.clone(),
                exclude.clone(),
            );
            analyze(&options, Arc::new(Logger::stdout()), &mut std::io::stdout())?
        }
        Commands::Ls { manifest } => {
            let store = manifest::load(manifest)?;
            store.write_tree(&mut std::io::stdout())?
        }
    }

    Ok(())
}
