mod commands;
mod formatting;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use commands::WorkspaceOptions;

#[derive(Parser)]
#[command(name = "pkgorder")]
#[command(about = "Orders monorepo packages so dependencies build first")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory to start looking for pkgorder.toml from.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Overrides `packages_dir` from pkgorder.toml.
    #[arg(long)]
    packages_dir: Option<PathBuf>,

    /// Overrides `internal_prefix` from pkgorder.toml.
    #[arg(long)]
    prefix: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long, action)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print packages in build order.
    Order {
        #[arg(long, action)]
        json: bool,
    },
    /// Report packages caught in dependency cycles.
    Cycles {
        #[arg(long, action)]
        json: bool,
        /// Exit with an error if any cycle exists.
        #[arg(long, action)]
        strict: bool,
    },
    /// List packages and their internal dependencies.
    List {
        #[arg(long, action)]
        json: bool,
    },
    /// Summarise the dependency graph.
    Graph {
        /// Emit Graphviz DOT instead.
        #[arg(long, action)]
        dot: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = WorkspaceOptions {
        root: cli.root,
        packages_dir: cli.packages_dir,
        prefix: cli.prefix,
    };

    match cli.command {
        Commands::Order { json } => commands::cmd_order(&options, json)?,
        Commands::Cycles { json, strict } => commands::cmd_cycles(&options, json, strict)?,
        Commands::List { json } => commands::cmd_list(&options, json)?,
        Commands::Graph { dot } => commands::cmd_graph(&options, dot)?,
    }

    Ok(())
}
