use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

mod bench;
mod validate;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "graph-connectivity workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the release binary against petgraph on random graphs
    Validate(validate::ValidateArgs),
    /// Run the criterion benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => validate::run(&args)?,
        Commands::Bench { quick, report_only } => {
            if !report_only {
                bench::run_benchmarks(quick)?;
            }
            bench::generate_report()?;
        }
    }

    Ok(())
}

/// Builds the `connectivity` binary in release mode and returns its path.
fn build_release_binary() -> Result<PathBuf> {
    println!("Compiling connectivity (release)...");
    let status = Command::new("cargo")
        .args(["build", "--release", "--bin", "connectivity"])
        .status()?;
    if !status.success() {
        bail!("Failed to compile the connectivity binary");
    }

    let binary = Path::new("target")
        .join("release")
        .join(format!("connectivity{}", std::env::consts::EXE_SUFFIX));
    if !binary.exists() {
        bail!("Expected binary at {}", binary.display());
    }
    Ok(binary)
}
