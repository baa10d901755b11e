//! CLI entry point for subguard.
//!
//! This module is intentionally thin: it handles argument parsing, the fetch
//! and model-building wiring, rendering, and exit codes. All validation logic
//! lives in the library crates.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use subguard_domain::report::DomainReport;
use subguard_repo::build_repo_model;
use subguard_spdx::{fetch_catalog, DEFAULT_SPDX_BASE_URL};
use subguard_types::RepoPath;

mod render;

#[derive(Parser, Debug)]
#[command(
    name = "subguard",
    version,
    about = "Validate a YAML dependency manifest against git submodule state and the SPDX license list"
)]
struct Cli {
    /// Path to the manifest file (e.g. manifest.yml).
    manifest_path: Utf8PathBuf,

    /// Submodule paths to exclude from the missing-submodule check.
    #[arg(short = 'i', long = "ignore-paths", num_args = 1.., value_name = "PATH")]
    ignore_paths: Vec<String>,

    /// License identifiers to treat as valid even when absent from the SPDX
    /// catalog.
    #[arg(short = 's', long = "ignore-spdx", num_args = 1.., value_name = "ID")]
    ignore_spdx: Vec<String>,

    /// Base URL of the SPDX license-list-data JSON documents.
    #[arg(long, default_value = DEFAULT_SPDX_BASE_URL, value_name = "URL")]
    spdx_url: String,
}

/// At least one validation error was found.
const EXIT_VALIDATION_FAILED: i32 = 1;
/// The run aborted before producing a validation report.
const EXIT_FATAL: i32 = 2;

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            if report.error_count() > 0 {
                std::process::exit(EXIT_VALIDATION_FAILED);
            }
        }
        Err(err) => {
            render::eprint_fatal(&format!("{err:#}"));
            std::process::exit(EXIT_FATAL);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<DomainReport> {
    if !cli.manifest_path.is_file() {
        anyhow::bail!("no manifest file found at {}", cli.manifest_path);
    }
    let manifest_dir = match cli.manifest_path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };

    let ignored_paths: Vec<RepoPath> = cli.ignore_paths.iter().map(RepoPath::new).collect();
    for path in &ignored_paths {
        if !manifest_dir.join(path.as_str()).exists() {
            render::print_warning(0, &format!("ignored path {path} was not found"));
        }
    }

    println!("downloading SPDX license data from {}", cli.spdx_url);
    let catalog =
        fetch_catalog(&cli.spdx_url, &cli.ignore_spdx).context("load SPDX catalog")?;

    println!("validating manifest {}", cli.manifest_path);
    let model = build_repo_model(&cli.manifest_path, &ignored_paths)?;
    let report = subguard_domain::evaluate(&model, &catalog);

    render::print_report(&report);
    println!("total errors: {}", report.error_count());

    Ok(report)
}
