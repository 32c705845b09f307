//! Batch validation of many selections from a `net,x,y` table.

use anyhow::{bail, Context, Result};
use cubenet::{validate_detailed, CellSet, Category, Point};
use polars::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// One validated selection.
#[derive(Debug, Serialize)]
pub struct BatchRow {
    pub net: i64,
    pub cells: CellSet,
    pub valid: bool,
    pub category: Category,
    pub components: usize,
}

/// Read selections grouped by `net`, keeping the first-seen order of ids and
/// the row order of cells within each net. CSV by default, parquet by
/// extension.
pub fn load_nets(input: &Path) -> Result<Vec<(i64, CellSet)>> {
    let lf = match input.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(input, ScanArgsParquet::default())
            .with_context(|| format!("scanning {}", input.display()))?,
        _ => LazyCsvReader::new(input)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("reading {}", input.display()))?,
    };
    let df = lf
        .select([
            col("net").cast(DataType::Int64),
            col("x").cast(DataType::Int32),
            col("y").cast(DataType::Int32),
        ])
        .collect()
        .context("expected columns net, x, y")?;
    tracing::info!(rows = df.height(), "input_table_shape");

    let nets = df.column("net")?.i64()?;
    let xs = df.column("x")?.i32()?;
    let ys = df.column("y")?.i32()?;

    let mut order: Vec<i64> = Vec::new();
    let mut groups: HashMap<i64, CellSet> = HashMap::new();
    let mut skipped = 0usize;
    for ((net, x), y) in nets.into_iter().zip(xs).zip(ys) {
        let (Some(net), Some(x), Some(y)) = (net, x, y) else {
            skipped += 1;
            continue;
        };
        groups
            .entry(net)
            .or_insert_with(|| {
                order.push(net);
                CellSet::new()
            })
            .insert(Point::new(x, y));
    }
    if skipped > 0 {
        tracing::warn!(skipped, "rows with missing values ignored");
    }
    if order.is_empty() && df.height() > 0 {
        bail!("no usable rows in {}", input.display());
    }
    Ok(order
        .into_iter()
        .filter_map(|net| groups.remove(&net).map(|cells| (net, cells)))
        .collect())
}

pub fn validate_all(nets: Vec<(i64, CellSet)>) -> Vec<BatchRow> {
    nets.into_iter()
        .map(|(net, cells)| {
            let report = validate_detailed(&cells);
            BatchRow {
                net,
                cells,
                valid: report.validation.valid,
                category: report.validation.category,
                components: report.components,
            }
        })
        .collect()
}

/// Count rows per category, in `Category::ALL` order.
pub fn histogram<'a, I>(categories: I) -> Vec<(Category, usize)>
where
    I: IntoIterator<Item = &'a Category>,
{
    let mut counts: HashMap<Category, usize> = HashMap::new();
    for c in categories {
        *counts.entry(*c).or_default() += 1;
    }
    Category::ALL
        .into_iter()
        .map(|c| (c, counts.get(&c).copied().unwrap_or(0)))
        .collect()
}
