//! Random connected nets (frontier growth + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of connected 6-face placements
//!   for benches, probes, and randomized tests. Most draws are not valid
//!   cube nets; that mix is exactly what validation callers see in practice.
//!
//! Model
//! - Start from one face at the origin and repeatedly attach a new face to a
//!   uniformly drawn empty neighbor of the shape so far (polyomino growth).
//!   `snake_bias` optionally restricts growth to the newest face, trading
//!   blobby shapes for snaky ones. Determinism uses a replay token
//!   `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Dir, Placement};

/// Growth sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GrowthCfg {
    /// Probability of growing only at the most recently placed face, in
    /// [0, 1]. 0 samples uniformly over the whole frontier (compact shapes),
    /// 1 always extends the newest face (strips and hooks).
    pub snake_bias: f64,
}
impl Default for GrowthCfg {
    fn default() -> Self {
        Self { snake_bias: 0.3 }
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
        // SplitMix64 finalizer; cheap and stable across platforms.
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

/// Draw a connected 6-face placement by frontier growth.
///
/// Faces are numbered in placement order, so face 0 always sits at the
/// origin. Cells are distinct by construction, hence the result is always
/// edge-connected; whether it folds into a cube is up to the validator.
pub fn draw_net_growth(cfg: GrowthCfg, tok: ReplayToken) -> [Placement; 6] {
    let mut rng = tok.to_std_rng();
    let bias = cfg.snake_bias.clamp(0.0, 1.0);
    let mut cells: Vec<(i32, i32)> = Vec::with_capacity(6);
    cells.push((0, 0));
    while cells.len() < 6 {
        let anchors: Vec<(i32, i32)> = if rng.gen::<f64>() < bias {
            vec![cells[cells.len() - 1]]
        } else {
            cells.clone()
        };
        let mut open = open_neighbors(&cells, &anchors);
        if open.is_empty() {
            // The newest cell can be landlocked; widen to the full frontier.
            open = open_neighbors(&cells, &cells);
        }
        let pick = open[rng.gen_range(0..open.len())];
        cells.push(pick);
    }
    let mut out = [Placement::new(0, 0, 0); 6];
    for (i, &(x, y)) in cells.iter().enumerate() {
        out[i] = Placement::new(i, x, y);
    }
    out
}

/// Empty cells edge-adjacent to any of `anchors`, deduped, in scan order.
fn open_neighbors(cells: &[(i32, i32)], anchors: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let mut open = Vec::new();
    for &(x, y) in anchors {
        for d in Dir::ALL {
            let (dx, dy) = d.offset();
            let c = (x + dx, y + dy);
            if !cells.contains(&c) && !open.contains(&c) {
                open.push(c);
            }
        }
    }
    open
}
