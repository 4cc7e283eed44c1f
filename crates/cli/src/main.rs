use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use platonic::burnside::{CountCfg, CountEvent};
use platonic::geom3::GeomCfg;
use platonic::solid::{Solid, SolidData};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "platonic-cli")]
#[command(about = "Count rotation-distinct edge subsets of the Platonic solids")]
struct Cmd {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Count edge subsets and print the results table
    Count {
        /// Comma-separated solids: tetra, cube, octa, ico, dod
        #[arg(long, value_delimiter = ',', default_values_t = Solid::ALL.to_vec())]
        solids: Vec<Solid>,
        /// Process work items on the calling thread only
        #[arg(long)]
        sequential: bool,
        /// Each work item covers at most 2^N cycle unions
        #[arg(long, default_value_t = 16)]
        batch_bits: u32,
        /// Worker threads for counting (default: rayon picks one per core)
        #[arg(long, conflicts_with = "sequential")]
        workers: Option<usize>,
        /// Write the table as .csv or .parquet (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print geometry, group order and edge-cycle statistics (no counting)
    Inspect {
        #[arg(long, value_delimiter = ',', default_values_t = Solid::ALL.to_vec())]
        solids: Vec<Solid>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct CountParams {
    parallel: bool,
    batch_bits: u32,
    workers: Option<usize>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Count {
            solids,
            sequential,
            batch_bits,
            workers,
            out,
        } => {
            let cfg = CountCfg {
                parallel: !sequential,
                batch_bits,
                workers,
            };
            count(&solids, &cfg, out)
        }
        Action::Inspect { solids } => inspect(&solids),
        Action::Report => report(),
    }
}

fn build(solid: Solid) -> Result<SolidData> {
    let started = Instant::now();
    let data = SolidData::build(solid, &GeomCfg::default())
        .with_context(|| format!("building {solid}"))?;
    tracing::info!(
        solid = %solid,
        vertices = data.geometry.vertex_count(),
        edges = data.geometry.edge_count(),
        triangles = data.geometry.triangles.len(),
        group_order = data.group.order(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "geometry and group ready"
    );
    Ok(data)
}

fn count_one(data: &SolidData, cfg: &CountCfg) -> Result<table::Row> {
    let solid = data.solid;
    let log_event = |event: &CountEvent| match event {
        CountEvent::Started {
            elements,
            work_items,
            unions,
        } => tracing::info!(
            solid = %solid,
            elements = *elements,
            work_items = *work_items,
            unions = *unions,
            "counting"
        ),
        CountEvent::BatchCounted {
            element,
            cycles,
            start,
            end,
            counts,
        } => tracing::debug!(
            solid = %solid,
            element = *element,
            cycles = *cycles,
            start = *start,
            end = *end,
            connected = counts.connected,
            valid = counts.valid,
            "batch"
        ),
        CountEvent::Finished { totals } => tracing::info!(
            solid = %solid,
            all = totals.all,
            connected = totals.connected,
            valid = totals.valid,
            "burnside totals"
        ),
    };
    let started = Instant::now();
    let report = data
        .count(cfg, &log_event, None)
        .with_context(|| format!("counting {solid}"))?;
    let seconds = started.elapsed().as_secs_f64();
    tracing::info!(solid = %solid, elapsed_s = seconds, "completed");
    Ok(table::Row { report, seconds })
}

fn count(solids: &[Solid], cfg: &CountCfg, out: Option<PathBuf>) -> Result<()> {
    let mut rows = Vec::with_capacity(solids.len());
    for &solid in solids {
        let data = build(solid)?;
        rows.push(count_one(&data, cfg)?);
    }
    let mut df = table::reports_frame(&rows)?;
    println!("{df}");
    if let Some(out) = out {
        table::write_frame(&mut df, &out)?;
        let params = serde_json::to_value(CountParams {
            parallel: cfg.parallel,
            batch_bits: cfg.batch_bits,
            workers: cfg.workers,
        })?;
        let names = solids.iter().map(|s| s.short_name().to_string()).collect();
        let sidecar = provenance::write_sidecar(&out, provenance::Sidecar::new(params, names))?;
        tracing::info!(out = %out.display(), provenance = %sidecar.display(), "wrote results");
    }
    Ok(())
}

/// Number of group elements per edge-cycle count.
fn cycle_histogram(data: &SolidData) -> Result<BTreeMap<usize, usize>> {
    let mut hist = BTreeMap::new();
    for p in data.edge_permutations()? {
        *hist.entry(p.cycles().len()).or_insert(0) += 1;
    }
    Ok(hist)
}

fn inspect(solids: &[Solid]) -> Result<()> {
    for &solid in solids {
        let data = build(solid)?;
        let hist = cycle_histogram(&data)?;
        let unions: u64 = hist.iter().map(|(&c, &n)| (n as u64) << c).sum();
        println!(
            "{solid}: V={} E={} triangles={} |G|={} fixed-subset unions={unions}",
            data.geometry.vertex_count(),
            data.geometry.edge_count(),
            data.geometry.triangles.len(),
            data.group.order(),
        );
        for (cycles, elements) in hist {
            println!("  {elements:>3} element(s) with {cycles:>2} edge cycles");
        }
    }
    Ok(())
}

fn report() -> Result<()> {
    let known: Vec<_> = Solid::ALL
        .iter()
        .map(|s| {
            let k = s.known();
            serde_json::json!({
                "solid": s.name(),
                "vertices": k.vertices,
                "edges": k.edges,
                "triangles": k.triangles,
                "group_order": k.group_order,
            })
        })
        .collect();
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "platonic_version": platonic::VERSION,
        "solids": known,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
