//! Random star-shaped rings (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sampler of simple polygons for property tests and
//!   benchmarks. Unlike a convex hull sampler we keep every vertex, so rings
//!   are generally non-convex but always simple.
//!
//! Model
//! - `n` equally spaced angles on [0, 2π) plus a random phase, each jittered by
//!   less than half the spacing, radii `base_radius * (1 + u)` with
//!   `u ∈ [-radial_jitter, radial_jitter]`. Angles stay strictly increasing,
//!   so the ring is star-shaped around the origin and counter-clockwise.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::coord::Coord;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49]
    /// (tighter for triangles).
    pub angle_jitter_frac: f64,
    /// Relative radial amplitude. Clamped to [0, 0.95] so radii stay positive.
    pub radial_jitter: f64,
    pub base_radius: f64,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 24 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
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

    /// Next token in the same stream.
    #[inline]
    pub fn advance(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw a simple counter-clockwise ring around the origin.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<Coord> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    // Every angular gap must stay below π or the fan around the origin folds.
    let aj_max = ((n as f64) / 4.0 - 0.501).min(0.49);
    let aj = cfg.angle_jitter_frac.clamp(0.0, aj_max);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::{orientation, signed_area, Orientation};
    use crate::cfg::AreaCfg;

    #[test]
    fn reproducible_draw() {
        let cfg = StarCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        let a = draw_star_polygon(cfg, tok);
        let b = draw_star_polygon(cfg, tok);
        assert_eq!(a, b);
        let c = draw_star_polygon(cfg, tok.advance());
        assert_ne!(a, c);
    }

    #[test]
    fn draws_are_ccw_with_requested_size() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Fixed(9),
            ..StarCfg::default()
        };
        let mut tok = ReplayToken { seed: 2024, index: 0 };
        for _ in 0..50 {
            let ring = draw_star_polygon(cfg, tok);
            assert_eq!(ring.len(), 9);
            assert!(signed_area(&ring) > 0.0);
            assert_eq!(
                orientation(&ring, AreaCfg::default()),
                Orientation::CounterClockwise
            );
            tok = tok.advance();
        }
    }

    #[test]
    fn vertex_count_floor_is_three() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Fixed(1),
            ..StarCfg::default()
        };
        let ring = draw_star_polygon(cfg, ReplayToken { seed: 1, index: 1 });
        assert_eq!(ring.len(), 3);
    }
}
