//! Random integer point clouds (box + ring mix, replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for hull inputs used by the
//!   benches, the randomized tests and the CLI `gen` command.
//!
//! Model
//! - Draw `n` points: a `ring_share` fraction on a rounded circle of radius
//!   `half_extent` (many hull vertices, many near-collinear triples), the rest
//!   uniform in the square `[-half_extent, half_extent]²` (mostly interior).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Point`, `hull::compute_hull`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Point count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountDist {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl CountDist {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            CountDist::Fixed(n) => n,
            CountDist::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: CountDist,
    /// Coordinates lie in `[-half_extent, half_extent]`. Values below 1 are raised to 1.
    pub half_extent: i32,
    /// Fraction of points placed on the ring. Clamped to [0, 1].
    pub ring_share: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: CountDist::Fixed(64),
            half_extent: 1000,
            ring_share: 0.25,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a reproducible point cloud. May contain duplicates and may be
/// degenerate for tiny counts; `compute_hull` reports those cases.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let r = cfg.half_extent.max(1);
    let share = if cfg.ring_share.is_finite() {
        cfg.ring_share.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let on_ring = ((n as f64) * share).round() as usize;
    let radius = f64::from(r);
    let mut pts = Vec::with_capacity(n);
    for _ in 0..on_ring.min(n) {
        let theta = rng.gen::<f64>() * std::f64::consts::TAU;
        // |round(r·cos θ)| <= r, so the cast cannot saturate
        pts.push(Point::new(
            (radius * theta.cos()).round() as i32,
            (radius * theta.sin()).round() as i32,
        ));
    }
    while pts.len() < n {
        pts.push(Point::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r)));
    }
    tracing::trace!(n, on_ring, half_extent = r, seed = tok.seed, index = tok.index, "cloud drawn");
    pts
}
