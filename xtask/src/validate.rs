//! Random-graph validation of the `connectivity` binary.
//!
//! Generates Erdős–Rényi graphs G(n, p), writes each in the input format, runs
//! the release binary on the file and compares its verdict with petgraph's
//! component count. With `--reuse`, matrices already present in the output
//! directory are loaded instead of regenerated.

use anyhow::{bail, Context, Result};
use clap::Args;
use graph_connectivity::loader::{self, LoaderConfig};
use graph_connectivity::{AdjacencyMatrix, ConnectivityReport};
use petgraph::graph::{NodeIndex, UnGraph};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

const DEFAULT_PROBABILITIES: [f64; 8] = [0.01, 0.02, 0.05, 0.07, 0.10, 0.15, 0.20, 0.25];

#[derive(Args)]
pub struct ValidateArgs {
    /// Vertices per generated graph
    #[arg(long, default_value_t = 89)]
    vertices: usize,

    /// Graphs generated per edge probability
    #[arg(long, default_value_t = 15)]
    samples: usize,

    /// Edge probabilities (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_PROBABILITIES)]
    probabilities: Vec<f64>,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Directory for generated matrices and reports
    #[arg(long, default_value = "validation_data")]
    out_dir: PathBuf,

    /// Load matrices already in the output directory instead of regenerating them
    #[arg(long, default_value_t = false)]
    reuse: bool,
}

#[derive(Serialize)]
struct Sample {
    file: String,
    expected: bool,
    obtained: bool,
}

#[derive(Serialize)]
struct ProbabilityResult {
    probability: f64,
    accuracy: f64,
    samples: Vec<Sample>,
}

pub fn run(args: &ValidateArgs) -> Result<()> {
    if args.vertices == 0 || args.samples == 0 {
        bail!("--vertices and --samples must be at least 1");
    }
    if let Some(p) = args.probabilities.iter().find(|p| !(0.0..=1.0).contains(*p)) {
        bail!("edge probability {p} is outside [0, 1]");
    }

    let binary = crate::build_release_binary()?;
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut results = Vec::with_capacity(args.probabilities.len());

    for &p in &args.probabilities {
        let mut samples = Vec::with_capacity(args.samples);

        for i in 0..args.samples {
            let path = args.out_dir.join(format!("graph_p{p:.2}_{}.txt", i + 1));
            let matrix = sample_matrix(&path, args.reuse, args.vertices, p, &mut rng)?;
            let expected = reference_connected(&matrix);

            let obtained = run_binary(&binary, args.vertices, &path)?;
            println!(
                "p={p:.2} | {} | expected={expected} | obtained={obtained}",
                path.display()
            );
            samples.push(Sample {
                file: path.display().to_string(),
                expected,
                obtained,
            });
        }

        let agree = samples.iter().filter(|s| s.expected == s.obtained).count();
        #[allow(clippy::cast_precision_loss)]
        let accuracy = agree as f64 / samples.len() as f64;
        println!(">> Probability {p:.2} -> accuracy: {:.1}%", accuracy * 100.0);

        results.push(ProbabilityResult {
            probability: p,
            accuracy,
            samples,
        });
    }

    write_reports(&args.out_dir, args.vertices, &results)?;

    let mismatches: usize = results
        .iter()
        .map(|r| r.samples.iter().filter(|s| s.expected != s.obtained).count())
        .sum();
    if mismatches > 0 {
        bail!("{mismatches} verdict(s) disagreed with the reference");
    }
    Ok(())
}

/// Samples G(n, p): each unordered pair is an edge with probability `p`.
fn erdos_renyi(n: usize, p: f64, rng: &mut impl Rng) -> AdjacencyMatrix {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen_bool(p) {
                edges.push((u, v));
            }
        }
    }
    AdjacencyMatrix::from_edges(n, &edges)
}

/// Loads the matrix at `path` when `reuse` is set and the file exists;
/// otherwise samples a fresh G(n, p) and saves it there.
fn sample_matrix(
    path: &Path,
    reuse: bool,
    vertices: usize,
    p: f64,
    rng: &mut impl Rng,
) -> Result<AdjacencyMatrix> {
    if reuse && path.is_file() {
        let config = LoaderConfig::default().with_max_vertices(vertices);
        return loader::load(path, &config)
            .with_context(|| format!("Failed to reuse {}", path.display()));
    }

    let matrix = erdos_renyi(vertices, p, rng);
    matrix
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(matrix)
}

fn reference_connected(matrix: &AdjacencyMatrix) -> bool {
    let n = matrix.order();
    let mut graph = UnGraph::<(), ()>::with_capacity(n, 0);
    for _ in 0..n {
        graph.add_node(());
    }
    for u in 0..n {
        for v in matrix.out_neighbors(u).filter(|&v| v > u) {
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
    }
    petgraph::algo::connected_components(&graph) == 1
}

fn run_binary(binary: &Path, vertices: usize, input: &Path) -> Result<bool> {
    let output = Command::new(binary)
        .arg("--format")
        .arg("json")
        .arg("--max-vertices")
        .arg(vertices.to_string())
        .arg(input)
        .output()
        .with_context(|| format!("Failed to run {}", binary.display()))?;

    if !output.status.success() {
        bail!(
            "connectivity failed on {}: {}",
            input.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let report: ConnectivityReport = serde_json::from_slice(&output.stdout)
        .with_context(|| format!("Unexpected output for {}", input.display()))?;
    Ok(report.connected)
}

fn write_reports(out_dir: &Path, vertices: usize, results: &[ProbabilityResult]) -> Result<()> {
    let json_path = out_dir.join("report.json");
    fs::write(&json_path, serde_json::to_string_pretty(results)?)?;

    let md_path = out_dir.join("report.md");
    let mut file = fs::File::create(&md_path)?;

    writeln!(file, "# Connectivity Validation Report")?;
    writeln!(file)?;
    writeln!(file, "Reference: petgraph `connected_components`, n = {vertices}.")?;
    writeln!(file)?;
    writeln!(file, "| p | Samples | Connected (expected) | Accuracy |")?;
    writeln!(file, "|---|---|---|---|")?;
    for r in results {
        let connected = r.samples.iter().filter(|s| s.expected).count();
        writeln!(
            file,
            "| {:.2} | {} | {} | **{:.1}%** |",
            r.probability,
            r.samples.len(),
            connected,
            r.accuracy * 100.0
        )?;
    }

    println!("Report written to {} and {}", md_path.display(), json_path.display());
    Ok(())
}
