//! `qmb` — command-line front end for the typed quantum-circuit executor.
//!
//! This binary is an external collaborator of the runtime (`spec.md` §1):
//! it parses arguments, loads a `.qmb` container, and prints human-readable
//! output. All circuit semantics live in `qmb-exec`; this crate never
//! touches a `Matrix` entry directly except to print it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use console::style;
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{info, inspect, run};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// qmb - a typed quantum-circuit executor over finite-dimensional C*-algebras
#[derive(Parser)]
#[command(name = "qmb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a `.qmb` binary and execute its entrypoint circuit
    Run {
        /// Path to the `.qmb` container
        file: PathBuf,

        /// JSON matrix file to use as input (defaults to the identity on
        /// the entrypoint's domain)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print a `.qmb` binary's header fields without executing anything
    Inspect {
        /// Path to the `.qmb` container
        file: PathBuf,
    },

    /// Print the supported primitive set and their stable ordinals
    Info,

    /// Show version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Run { file, input } => run::execute(&file, input.as_deref()),
        Commands::Inspect { file } => inspect::execute(&file),
        Commands::Info => {
            info::execute();
            Ok(())
        }
        Commands::Version => {
            println!("qmb {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("error:").red().bold(), e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
