use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use promote_importgraph::{build, BuildOutput, DirWorkspace};

mod commands;
mod config;
mod error;

use config::{FileConfig, Overrides};
use error::CliError;

#[derive(Parser, Debug)]
#[command(name = "promote")]
#[command(about = "Import dependency graphs of a Go source tree", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every package with its direct imports
    Graph {
        /// Print importers instead of imports
        #[arg(short, long)]
        reverse: bool,
        #[command(flatten)]
        workspace: WorkspaceArgs,
    },

    /// Print every package reachable from the given packages
    Deps {
        /// Follow importers instead of imports
        #[arg(short, long)]
        reverse: bool,
        /// Import paths to start from
        #[arg(value_name = "PKG", required = true)]
        packages: Vec<String>,
        #[command(flatten)]
        workspace: WorkspaceArgs,
    },
}

#[derive(Args, Debug)]
struct WorkspaceArgs {
    /// Workspace root directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Number of loader threads
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,
    /// Ignore imports of _test.go files
    #[arg(long)]
    no_tests: bool,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Graph { reverse, workspace } => {
            let output = load(workspace)?;
            commands::handle_graph(&output, reverse, &mut out).map_err(CliError::OutputError)?;
        }
        Command::Deps { reverse, packages, workspace } => {
            let output = load(workspace)?;
            commands::handle_deps(&output, &packages, reverse, &mut out).map_err(CliError::OutputError)?;
        }
    }
    out.flush().map_err(CliError::OutputError)?;
    Ok(())
}

/// Resolves configuration and builds both graphs, summarizing load
/// failures on stderr.
fn load(args: WorkspaceArgs) -> Result<BuildOutput, CliError> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let overrides = Overrides { root: args.root, jobs: args.jobs, no_tests: args.no_tests };
    let config = overrides.apply(file);

    if !config.workspace.root.is_dir() {
        return Err(CliError::RootNotFound { root: config.workspace.root });
    }

    let workspace = DirWorkspace::new(config.workspace);
    let output = build(&workspace, &config.build);
    commands::report_errors(&output, &mut std::io::stderr().lock()).map_err(CliError::OutputError)?;
    Ok(output)
}
