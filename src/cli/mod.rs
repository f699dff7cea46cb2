// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and prints results. All the work
// is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `split` — copies the dataset into train/ and val/
//   2. `plan`  — prints the per-class split, copies nothing
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, DatasetArgs, SplitArgs};

use crate::application::split_use_case::SplitUseCase;
use crate::domain::{class_split::SplitSummary, split_config::SplitConfig};
use crate::infra::config_store;

/// The main CLI struct, parsed via the clap Parser derive.
#[derive(Parser, Debug)]
#[command(
    name = "train-val-split",
    version,
    about = "Split a class-per-folder image dataset into train/ and val/ folders."
)]
pub struct Cli {
    /// The subcommand to run (split or plan)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args) => run_split(args),
            Commands::Plan(args)  => run_plan(args),
        }
    }
}

/// Handles the `split` subcommand.
fn run_split(args: SplitArgs) -> Result<()> {
    let cfg = resolve_config(args.dataset)?;

    tracing::info!("Splitting dataset under '{}'", cfg.base_path.display());

    let summary = SplitUseCase::new(&cfg)
        .execute()
        .with_context(|| format!("Split of '{}' failed", cfg.base_path.display()))?;

    if let Some(path) = &args.save_config {
        config_store::save_config(path, &cfg)?;
    }

    print_summary(&summary);
    println!("Split complete.");
    Ok(())
}

/// Handles the `plan` subcommand.
fn run_plan(args: DatasetArgs) -> Result<()> {
    let cfg = resolve_config(args)?;

    let summary = SplitUseCase::new(&cfg)
        .plan()
        .with_context(|| format!("Cannot plan split of '{}'", cfg.base_path.display()))?;

    print_summary(&summary);
    println!("Dry run, nothing copied.");
    Ok(())
}

/// A --config file replaces every other dataset flag.
fn resolve_config(args: DatasetArgs) -> Result<SplitConfig> {
    match &args.config {
        Some(path) => config_store::load_config(path),
        None => Ok(args.into()),
    }
}

fn print_summary(summary: &SplitSummary) {
    let width = summary
        .classes
        .iter()
        .map(|c| c.label.as_str().len())
        .chain(std::iter::once("class".len()))
        .max()
        .unwrap_or(5);

    println!("{:<width$}  {:>8}  {:>8}", "class", "train", "val");
    for c in &summary.classes {
        println!("{:<width$}  {:>8}  {:>8}", c.label.as_str(), c.train, c.val);
    }
    println!(
        "{:<width$}  {:>8}  {:>8}",
        "total",
        summary.train_total(),
        summary.val_total()
    );
}
