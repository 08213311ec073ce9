//! gherkindoc CLI - Gherkin feature documentation generator.
//!
//! Provides commands for:
//! - `build`: Convert a tree of feature files into reStructuredText for Sphinx
//! - `sphinx-config`: Print a sample Sphinx `conf.py`

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, SphinxConfigArgs};
use output::Output;

/// gherkindoc - Gherkin feature documentation generator.
#[derive(Parser)]
#[command(name = "gherkindoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate rST documentation from a tree of feature files.
    Build(BuildArgs),
    /// Print a sample Sphinx configuration.
    SphinxConfig(SphinxConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let (verbose, quiet) = match &cli.command {
        Commands::Build(args) => (args.verbose, args.quiet),
        Commands::SphinxConfig(_) => (false, false),
    };
    let output = Output::new(quiet);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::SphinxConfig(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
