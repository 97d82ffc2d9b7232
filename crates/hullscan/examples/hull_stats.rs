//! Print hull sizes for a few random clouds, as a quick sanity check on counts.
//!
//! Usage:
//!   cargo run -p hullscan --example hull_stats -- box
//!   cargo run -p hullscan --example hull_stats -- ring
//!
//! Prints (n, hull vertices, pushes, pops, area) per sample.

use hullscan::cloud::{draw_cloud, CloudCfg, CountDist, ReplayToken};
use hullscan::compute_hull;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "box".to_string());
    let ring_share = match mode.as_str() {
        "box" => 0.0,
        "ring" => 1.0,
        _ => {
            eprintln!("usage: hull_stats [box|ring]");
            std::process::exit(2);
        }
    };
    let cfg = CloudCfg {
        count: CountDist::Uniform { min: 10, max: 5000 },
        half_extent: 10_000,
        ring_share,
    };
    for index in 0..8 {
        let pts = draw_cloud(cfg, ReplayToken::new(2025, index));
        match compute_hull(&pts) {
            Ok(hull) => {
                let stats = hull.stats();
                println!(
                    "n={:5}  vertices={:4}  pushes={:5}  pops={:5}  area={:.1}",
                    pts.len(),
                    hull.open_vertices().len(),
                    stats.pushes,
                    stats.pops,
                    hull.twice_area() as f64 / 2.0
                );
            }
            Err(e) => println!("n={:5}  {e}", pts.len()),
        }
    }
}
