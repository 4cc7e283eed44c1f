//! Result tabulation: one polars row per solid, printable and writable.

use anyhow::{bail, Context, Result};
use platonic::solid::SolidReport;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// One counted solid and the wall-clock seconds its count took.
#[derive(Clone, Copy, Debug)]
pub struct Row {
    pub report: SolidReport,
    pub seconds: f64,
}

/// Column order of the results table.
pub const COLUMNS: [&str; 9] = [
    "Platonic Solid",
    "V",
    "E",
    "G",
    "Faces have triangles?",
    "All Combinations",
    "All Connected",
    "Valid Incomplete",
    "Time (seconds)",
];

pub fn reports_frame(rows: &[Row]) -> PolarsResult<DataFrame> {
    let reports: Vec<SolidReport> = rows.iter().map(|r| r.report).collect();
    let col_u32 = |f: fn(&SolidReport) -> usize| -> Vec<u32> {
        reports.iter().map(|r| f(r) as u32).collect()
    };
    let col_u64 = |f: fn(&SolidReport) -> u64| -> Vec<u64> { reports.iter().map(f).collect() };
    df!(
        COLUMNS[0] => reports.iter().map(|r| r.solid.name()).collect::<Vec<_>>(),
        COLUMNS[1] => col_u32(|r| r.vertices),
        COLUMNS[2] => col_u32(|r| r.edges),
        COLUMNS[3] => col_u32(|r| r.group_order),
        COLUMNS[4] => reports
            .iter()
            .map(|r| if r.has_triangles { "Yes" } else { "No" })
            .collect::<Vec<_>>(),
        COLUMNS[5] => col_u64(|r| r.counts.all),
        COLUMNS[6] => col_u64(|r| r.counts.connected),
        COLUMNS[7] => col_u64(|r| r.counts.valid),
        COLUMNS[8] => rows.iter().map(|r| r.seconds).collect::<Vec<f64>>()
    )
}

/// Write `df` as CSV or Parquet, chosen by the file extension.
pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("csv") => {
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
        Some("parquet") => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ParquetWriter::new(file).finish(df)?;
        }
        _ => bail!(
            "unsupported output format for {} (use .csv or .parquet)",
            path.display()
        ),
    }
    Ok(())
}
