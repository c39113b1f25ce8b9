use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

const BENCHES: &[&str] = &["connectivity_benchmark", "loader_benchmark"];

pub fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running benchmarks...");

    // Build first to avoid measuring build time
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["bench", "--no-run"])
        .status()?;
    if !status.success() {
        bail!("Failed to compile benchmarks");
    }

    for bench in BENCHES {
        println!("\n>>> Benchmark: {bench}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("bench").arg("--bench").arg(bench);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {bench}"))?;

        if status.success() {
            println!("Finished {bench} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: Benchmark {bench} failed");
        }
    }

    Ok(())
}

/// Mean time and optional element throughput for one criterion workload.
struct Estimate {
    mean_ns: f64,
    elements: Option<f64>,
}

pub fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = BTreeMap::new();
    collect_results(criterion_dir, criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Mean | Throughput |")?;
    writeln!(file, "|---|---|---|")?;

    for (workload, estimate) in &results {
        let throughput = match estimate.elements {
            Some(elements) if estimate.mean_ns > 0.0 => {
                format_rate(elements * 1e9 / estimate.mean_ns)
            }
            _ => "-".to_string(),
        };
        writeln!(
            file,
            "| {workload} | {} | {throughput} |",
            format_time(estimate.mean_ns)
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns >= 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_rate(per_sec: f64) -> String {
    if per_sec > 1_000_000.0 {
        format!("{:.2}M elem/s", per_sec / 1_000_000.0)
    } else if per_sec > 1_000.0 {
        format!("{:.2}K elem/s", per_sec / 1_000.0)
    } else {
        format!("{per_sec:.0} elem/s")
    }
}

fn read_json(path: &Path) -> Option<serde_json::Value> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Walks `target/criterion`, reading `<workload>/new/estimates.json`.
fn collect_results(root: &Path, dir: &Path, results: &mut BTreeMap<String, Estimate>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) == Some("report") {
                continue;
            }
            collect_results(root, &path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        // Structure: .../workload/new/estimates.json
        let Some(baseline_dir) = path.parent() else { continue };
        if baseline_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(workload_dir) = baseline_dir.parent() else { continue };
        let Ok(workload) = workload_dir.strip_prefix(root) else { continue };

        let Some(mean_ns) = read_json(&path)
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64())
        else {
            continue;
        };
        let elements = read_json(&baseline_dir.join("benchmark.json"))
            .and_then(|json| json.get("throughput")?.get("Elements")?.as_f64());

        results.insert(
            workload.display().to_string(),
            Estimate { mean_ns, elements },
        );
    }
}
