use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hullscan::cloud::{draw_cloud, CloudCfg, CountDist, ReplayToken};
use hullscan::{compute_hull, Hull, Point};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "hullscan")]
#[command(about = "Convex hulls of integer point sets")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a .json or .csv point file and write it as JSON
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a reproducible random point cloud as JSON
    Gen {
        #[arg(long, default_value_t = 64)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1000)]
        half_extent: i32,
        /// Fraction of points placed on a circle
        #[arg(long, default_value_t = 0.25)]
        ring_share: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, out } => hull(&input, &out, cmd.tag),
        Action::Gen {
            count,
            seed,
            index,
            half_extent,
            ring_share,
            out,
        } => {
            let cfg = CloudCfg {
                count: CountDist::Fixed(count),
                half_extent,
                ring_share,
            };
            generate(cfg, ReplayToken::new(seed, index), &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

#[derive(Serialize)]
struct HullDoc {
    pivot: [i32; 2],
    hull: Vec<[i32; 2]>,
    vertex_count: usize,
    twice_area: i128,
    input_points: usize,
}

impl HullDoc {
    fn new(hull: &Hull, input_points: usize) -> Self {
        Self {
            pivot: hull.pivot().into(),
            hull: hull.vertices().iter().map(|&p| p.into()).collect(),
            vertex_count: hull.open_vertices().len(),
            twice_area: hull.twice_area(),
            input_points,
        }
    }
}

fn hull(input: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "hull");
    let points = input::read_points(input)?;
    let hull = compute_hull(&points)
        .with_context(|| format!("computing the hull of {}", input.display()))?;
    let doc = HullDoc::new(&hull, points.len());
    write_json(out, &doc)?;
    tracing::info!(
        vertices = doc.vertex_count,
        pops = hull.stats().pops,
        "hull written"
    );
    let payload = Payload::new(
        "hull",
        json!({ "input": input.to_string_lossy(), "input_points": points.len() }),
    )
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn generate(cfg: CloudCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(?cfg, seed = tok.seed, index = tok.index, out = %out.display(), "gen");
    let points = draw_cloud(cfg, tok);
    let rows: Vec<[i32; 2]> = points.iter().map(|&p: &Point| p.into()).collect();
    write_json(out, &rows)?;
    let payload = Payload::new(
        "gen",
        json!({
            "count": points.len(),
            "seed": tok.seed,
            "index": tok.index,
            "half_extent": cfg.half_extent,
            "ring_share": cfg.ring_share
        }),
    )
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new("report", json!({})).with_tag(tag);
    let obj = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
