//! dictmerge CLI
//!
//! Merges personal spell-checker dictionaries (IDEA XML and plain-text word
//! lists) and writes the union back to every source.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dictmerge_core::PathResolver;
use dictmerge_merge::{MergeOutcome, MergeRequest, MergeWorkflow};

#[derive(Parser)]
#[command(name = "dictmerge")]
#[command(about = "Keep spell-checker dictionaries in sync across IDEs and editors")]
#[command(version)]
struct Cli {
    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge all dictionaries and write the result back to each of them
    Merge(MergeArgs),

    /// Install a git pre-commit hook that runs `dictmerge merge`
    InstallHook {
        /// Project checkout containing a .git directory
        project_dir: PathBuf,

        /// Command the hook invokes
        #[arg(long, default_value = "dictmerge")]
        binary: String,
    },
}

#[derive(Args, Debug, Default)]
struct MergeArgs {
    /// Add XML-based IDEA dictionary as a merge source
    #[arg(long = "idea-dictionary", value_name = "FILE")]
    idea_dictionary: Vec<PathBuf>,

    /// Add plain text dictionary (Visual Assist, new IDEA, and many others) as a merge source
    #[arg(long = "plaintext-dictionary", value_name = "FILE")]
    plaintext_dictionary: Vec<PathBuf>,

    /// Lookup directory for IDEA and text dictionaries [default: $PROJECTS]
    #[arg(long, value_name = "DIR")]
    lookup_directory: Option<PathBuf>,

    /// Name of IDEA dictionary to lookup [default: current user]
    #[arg(long, value_name = "NAME")]
    idea_dictionary_name: Option<String>,
}

impl MergeArgs {
    /// Overlay command-line values on the environment defaults
    fn into_request(self, resolver: &PathResolver) -> MergeRequest {
        let mut request = MergeRequest::with_defaults(resolver);
        request.structured = self.idea_dictionary;
        request.plaintext = self.plaintext_dictionary;
        if let Some(dir) = self.lookup_directory {
            request.lookup_dir = Some(dir);
        }
        if let Some(name) = self.idea_dictionary_name {
            request.dictionary_name = Some(name);
        }
        request
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Merge(args) => merge(args),
        Commands::InstallHook {
            project_dir,
            binary,
        } => install_hook(project_dir, &binary),
    }
}

fn merge(args: MergeArgs) -> Result<()> {
    let resolver = PathResolver::from_process();
    let request = args.into_request(&resolver);

    let outcome = MergeWorkflow::new(resolver)
        .run(&request)
        .context("Dictionary merge failed")?;

    match outcome {
        MergeOutcome::NothingToMerge { found } => {
            info!("{} dictionaries found, nothing to merge", found);
        }
        MergeOutcome::Merged { providers, words } => {
            info!("Merged {} words into {} dictionaries", words, providers);
        }
    }
    Ok(())
}

fn install_hook(project_dir: PathBuf, binary: &str) -> Result<()> {
    let project_dir = std::path::absolute(&project_dir)
        .with_context(|| format!("Invalid project directory {}", project_dir.display()))?;
    info!("Project directory: {}", project_dir.display());

    let hook = dictmerge_hook::install_hook(&project_dir, binary)
        .context("Hook installation failed")?;
    info!("Installed {}", hook.display());
    Ok(())
}
