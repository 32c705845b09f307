mod batch;
mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cubenet::api::{
    build_folding_tree, free_polyominoes, parse_cells, parse_grid, render_grid, validate,
    validate_detailed, CellSet,
};
use cubenet::sample::{draw_polyomino, GrowCfg, ReplayToken};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cubenet")]
#[command(about = "Check whether grid selections fold into a cube")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

/// Where a single selection comes from.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct Selection {
    /// Cell list, e.g. "1,0 0,1 1,1 2,1 3,1 1,2"
    #[arg(long)]
    cells: Option<String>,
    /// Grid mask file: rows of 1/# (active) and 0/. (inactive)
    #[arg(long)]
    grid: Option<PathBuf>,
}

impl Selection {
    fn load(&self) -> Result<CellSet> {
        match (&self.cells, &self.grid) {
            (Some(list), _) => parse_cells(list).context("parsing --cells"),
            (None, Some(path)) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                parse_grid(&text).with_context(|| format!("parsing grid {}", path.display()))
            }
            (None, None) => anyhow::bail!("one of --cells or --grid is required"),
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Validate one selection and print the report as JSON
    Check {
        #[command(flatten)]
        selection: Selection,
    },
    /// Print the folding tree of one selection as JSON (null when empty)
    Tree {
        #[command(flatten)]
        selection: Selection,
    },
    /// Validate every net in a `net,x,y` table (CSV or parquet)
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// List free polyominoes of a given size with their verdicts
    Catalog {
        #[arg(long, default_value_t = 6)]
        size: usize,
        /// Also write the listing as JSON (with a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw random grown polyominoes and tally their verdicts
    Sample {
        #[arg(long, default_value_t = 1000)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 6)]
        cells: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Check { selection } => check(&selection),
        Action::Tree { selection } => tree(&selection),
        Action::Batch { input, out } => run_batch(&input, &out),
        Action::Catalog { size, out } => catalog(size, out.as_deref()),
        Action::Sample { count, seed, cells } => sample(count, seed, cells),
        Action::Report => report(),
    }
}

fn check(selection: &Selection) -> Result<()> {
    let cells = selection.load()?;
    let report = validate_detailed(&cells);
    tracing::info!(
        cells = report.cell_count,
        components = report.components,
        category = %report.validation.category,
        "check"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn tree(selection: &Selection) -> Result<()> {
    let cells = selection.load()?;
    let tree = build_folding_tree(&cells);
    let nodes = tree.as_ref().map_or(0, |t| t.len());
    tracing::info!(cells = cells.len(), nodes, "tree");
    if nodes < cells.len() {
        tracing::warn!(
            dropped = cells.len() - nodes,
            "cells unreachable from the root are not in the tree"
        );
    }
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

fn run_batch(input: &Path, out: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "batch");
    let nets = batch::load_nets(input)?;
    let rows = batch::validate_all(nets);
    let hist = batch::histogram(rows.iter().map(|r| &r.category));
    for (category, n) in &hist {
        tracing::info!(%category, n, "batch_category");
    }

    create_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let counts: serde_json::Map<String, serde_json::Value> = hist
        .iter()
        .map(|(c, n)| (c.to_string(), json!(n)))
        .collect();
    let payload = Payload::new("batch", json!({ "nets": rows.len(), "categories": counts }))
        .with_input(input.to_string_lossy());
    write_sidecar(out, payload)?;
    Ok(())
}

fn catalog(size: usize, out: Option<&Path>) -> Result<()> {
    let shapes = free_polyominoes(size);
    let mut entries = Vec::with_capacity(shapes.len());
    let mut valid = 0usize;
    for (index, shape) in shapes.into_iter().enumerate() {
        let cells = CellSet::from_points(shape);
        let v = validate(&cells);
        if v.valid {
            valid += 1;
        }
        println!("#{index:02} {}", v.category);
        print!("{}", render_grid(&cells));
        entries.push(json!({
            "index": index,
            "cells": cells,
            "valid": v.valid,
            "category": v.category,
        }));
    }
    tracing::info!(size, shapes = entries.len(), valid, "catalog");

    if let Some(out) = out {
        create_parent(out)?;
        fs::write(out, serde_json::to_vec_pretty(&entries)?)
            .with_context(|| format!("writing {}", out.display()))?;
        write_sidecar(out, Payload::new("catalog", json!({ "size": size })))?;
    }
    Ok(())
}

fn sample(count: u64, seed: u64, cells: usize) -> Result<()> {
    let cfg = GrowCfg { cells };
    let verdicts: Vec<_> = (0..count)
        .map(|index| validate(&draw_polyomino(cfg, ReplayToken::new(seed, index))).category)
        .collect();
    let hist = batch::histogram(verdicts.iter());
    tracing::info!(count, seed, cells, "sample");
    let obj: serde_json::Map<String, serde_json::Value> = hist
        .iter()
        .map(|(c, n)| (c.to_string(), json!(n)))
        .collect();
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block("report", json!({}), &[], &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
