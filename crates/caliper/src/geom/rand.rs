//! Deterministic random point clouds (replay tokens).
//!
//! Purpose
//! - A small, reproducible sampler for the randomized agreement tests and
//!   benchmarks: uniform coordinates in a square, indexable draws.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Number of points to draw (minimum 2).
    pub count: usize,
    /// Coordinates are uniform in `[-half_extent, half_extent]`.
    pub half_extent: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 32,
            half_extent: 10.0,
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

/// Draw a uniform point cloud in the configured square.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.max(2);
    let h = cfg.half_extent.abs().max(f64::MIN_POSITIVE);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}
