//! `connectivity` — checks whether the graph in an adjacency-matrix file is connected.
//!
//! Exit code 0 when a verdict was reached (connected or not), 1 on any load,
//! configuration or usage error.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use graph_connectivity::loader::{self, EdgeValues, LoaderConfig, Symmetry};
use graph_connectivity::{check, ConnectivityReport};

#[derive(Parser)]
#[command(name = "connectivity")]
#[command(version)]
#[command(about = "Check whether a graph given as an adjacency matrix is connected", long_about = None)]
struct Cli {
    /// Adjacency matrix file: whitespace-separated integers, one row per line
    path: PathBuf,

    /// Largest accepted number of vertices [default: 89]
    #[arg(long, value_name = "N")]
    max_vertices: Option<usize>,

    /// Reject tokens other than 0 and 1
    #[arg(long, default_value_t = false)]
    binary: bool,

    /// Reject matrices that are not symmetric
    #[arg(long, default_value_t = false)]
    require_symmetric: bool,

    /// JSON loader configuration; flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage text goes to stdout/stderr; a closed stream leaves nothing to report.
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    info!(?config, "loader configuration");

    let text = cli.format == OutputFormat::Text;
    if text {
        println!("Reading adjacency matrix from '{}'...", cli.path.display());
    }

    let matrix = loader::load(&cli.path, &config)
        .with_context(|| format!("failed to load '{}'", cli.path.display()))?;
    let n = matrix.order();
    if text {
        println!("Adjacency matrix ({n} x {n}) loaded successfully.\n");
    }

    let traversal = check(&matrix);
    let report = ConnectivityReport::new(&cli.path, &matrix, &traversal);

    match cli.format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<LoaderConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => LoaderConfig::default(),
    };

    if let Some(max) = cli.max_vertices {
        config.max_vertices = max;
    }
    if cli.binary {
        config.edge_values = EdgeValues::Binary;
    }
    if cli.require_symmetric {
        config.symmetry = Symmetry::Require;
    }

    config.validate().context("invalid loader configuration")?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<LoaderConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config '{}'", path.display()))?;
    LoaderConfig::from_json(&content)
        .with_context(|| format!("invalid config '{}'", path.display()))
}
