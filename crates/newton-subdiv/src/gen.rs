//! Random lattice subdivisions (grid + random diagonals, replay tokens).
//!
//! Purpose
//! - Deterministic inputs with a known cell count for tests and benches.
//!
//! Model
//! - A `width × height` grid of unit squares; each square is independently
//!   left whole or split by one of its two diagonals.
//! - Grid lines are emitted as single long polylines so the normalizer has to
//!   split them; coordinates are scaled by `unit` and shifted by `origin`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::lattice::{Point, Polyline};

/// Grid sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    pub width: usize,
    pub height: usize,
    /// Raw distance between grid lines.
    pub unit: i64,
    /// Probability that a square receives a diagonal. Clamped to [0, 1].
    pub split_prob: f64,
    /// Raw coordinates of the lower-left grid corner.
    pub origin: Point,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            width: 4,
            height: 3,
            unit: crate::lattice::DEFAULT_UNIT,
            split_prob: 0.5,
            origin: Point::new(0, 0),
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
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
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

/// A drawn grid and the number of maximal cells it must decompose into.
#[derive(Clone, Debug)]
pub struct GridDraw {
    pub polylines: Vec<Polyline>,
    pub expected_cells: usize,
    /// Normalized segment count: grid edges plus diagonals.
    pub expected_segments: usize,
}

/// Draw a random diagonal-split grid.
pub fn draw_grid(cfg: GridCfg, tok: ReplayToken) -> GridDraw {
    let mut rng = tok.to_std_rng();
    let (w, h) = (cfg.width.max(1) as i64, cfg.height.max(1) as i64);
    let u = cfg.unit.max(1);
    let p = cfg.split_prob.clamp(0.0, 1.0);
    let at = |i: i64, j: i64| Point::new(cfg.origin.x + i * u, cfg.origin.y + j * u);

    let mut polylines = Vec::new();
    for j in 0..=h {
        polylines.push(Polyline::new(vec![at(0, j), at(w, j)]));
    }
    for i in 0..=w {
        polylines.push(Polyline::new(vec![at(i, 0), at(i, h)]));
    }
    let mut diagonals = 0usize;
    for i in 0..w {
        for j in 0..h {
            if !rng.gen_bool(p) {
                continue;
            }
            let diag = if rng.gen_bool(0.5) {
                vec![at(i, j), at(i + 1, j + 1)]
            } else {
                vec![at(i + 1, j), at(i, j + 1)]
            };
            polylines.push(Polyline::new(diag));
            diagonals += 1;
        }
    }
    let squares = (w * h) as usize;
    let grid_edges = (w * (h + 1) + h * (w + 1)) as usize;
    GridDraw {
        polylines,
        expected_cells: squares + diagonals,
        expected_segments: grid_edges + diagonals,
    }
}
