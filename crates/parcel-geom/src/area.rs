//! Shoelace area and the ring measures built on it.
//!
//! Purpose
//! - `compute_area` is the contract every caller relies on: unsigned area of
//!   an implicitly closed ring, `0.0` for fewer than three vertices, no units,
//!   no rounding, no failure mode.
//! - The rest (signed area, orientation, centroid, perimeter, edge lengths)
//!   share the same wrap-around edge walk `i → (i + 1) mod n`.
//!
//! Notes
//! - Self-intersecting rings still produce a number. Lobes traversed in
//!   opposite directions cancel; that is the shoelace formula, not a bug.
//! - Inputs are read-only slices; nothing is cached between calls.

use nalgebra::Vector2;

use crate::cfg::AreaCfg;
use crate::coord::{Coord, Vertex};

/// Traversal direction of a ring (x right, y up).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    /// Fewer than three vertices, or zero area within tolerance.
    Degenerate,
}

/// Twice the signed area (sum of cross products over the closed ring).
#[inline]
fn twice_signed_area<V: Vertex>(coords: &[V]) -> f64 {
    let n = coords.len();
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += coords[i].x() * coords[j].y();
        area -= coords[j].x() * coords[i].y();
    }
    area
}

/// Unsigned area enclosed by the ring `coords`, in squared input units.
///
/// Returns `0.0` for fewer than three vertices. The ring closes implicitly,
/// so the first vertex must not be repeated at the end (repeating it is
/// harmless: the extra edge has zero length).
pub fn compute_area<V: Vertex>(coords: &[V]) -> f64 {
    if coords.len() < 3 {
        return 0.0;
    }
    (twice_signed_area(coords) / 2.0).abs()
}

/// `compute_area` for callers holding an optional boundary; `None` is `0.0`.
pub fn compute_area_opt<V: Vertex>(coords: Option<&[V]>) -> f64 {
    coords.map_or(0.0, compute_area)
}

/// Signed area: positive for counter-clockwise rings, negative for clockwise.
pub fn signed_area<V: Vertex>(coords: &[V]) -> f64 {
    if coords.len() < 3 {
        return 0.0;
    }
    twice_signed_area(coords) / 2.0
}

/// Classify traversal direction using `cfg.eps_area` as the zero band.
pub fn orientation<V: Vertex>(coords: &[V], cfg: AreaCfg) -> Orientation {
    let a = signed_area(coords);
    if a.abs() <= cfg.eps_area {
        Orientation::Degenerate
    } else if a > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Area centroid. `None` for fewer than three vertices or degenerate area.
///
/// Accumulates relative to the first vertex: cross products of absolute map
/// coordinates (~1e3) would swamp a parcel-sized area (~1e-8).
pub fn centroid<V: Vertex>(coords: &[V], cfg: AreaCfg) -> Option<Coord> {
    let n = coords.len();
    if n < 3 {
        return None;
    }
    let origin = coords[0].to_coord();
    let mut a = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let p = coords[i].to_coord() - origin;
        let q = coords[(i + 1) % n].to_coord() - origin;
        let cross = p.x * q.y - q.x * p.y;
        a += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    a *= 0.5;
    if a.abs() <= cfg.eps_area {
        return None;
    }
    Some(origin + Vector2::new(cx / (6.0 * a), cy / (6.0 * a)))
}

/// Length of each ring edge `i → (i + 1) mod n`. Empty for fewer than two vertices.
pub fn edge_lengths<V: Vertex>(coords: &[V]) -> Vec<f64> {
    let n = coords.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| (coords[(i + 1) % n].to_coord() - coords[i].to_coord()).norm())
        .collect()
}

/// Total boundary length of the closed ring.
pub fn perimeter<V: Vertex>(coords: &[V]) -> f64 {
    edge_lengths(coords).iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rings_are_zero() {
        let empty: [(f64, f64); 0] = [];
        assert_eq!(compute_area(&empty), 0.0);
        assert_eq!(compute_area(&[(3.0, 4.0)]), 0.0);
        assert_eq!(compute_area(&[(0.0, 0.0), (5.0, 5.0)]), 0.0);
        assert_eq!(compute_area_opt::<(f64, f64)>(None), 0.0);
        assert_eq!(signed_area(&[(0.0, 0.0), (5.0, 5.0)]), 0.0);
    }

    #[test]
    fn unit_square_and_triangle() {
        let sq = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        assert_eq!(compute_area(&sq), 1.0);
        let tri = [[0.0, 0.0], [4.0, 0.0], [0.0, 3.0]];
        assert_eq!(compute_area(&tri), 6.0);
        assert_eq!(compute_area_opt(Some(&tri[..])), 6.0);
    }

    #[test]
    fn sign_follows_traversal() {
        let ccw = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
        let mut cw = ccw;
        cw.reverse();
        assert_eq!(signed_area(&ccw), 4.0);
        assert_eq!(signed_area(&cw), -4.0);
        let cfg = AreaCfg::default();
        assert_eq!(orientation(&ccw, cfg), Orientation::CounterClockwise);
        assert_eq!(orientation(&cw, cfg), Orientation::Clockwise);
        let line = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)];
        assert_eq!(orientation(&line, cfg), Orientation::Degenerate);
    }

    #[test]
    fn bowtie_lobes_cancel() {
        // Two unit triangles traversed in opposite directions.
        let bowtie = [(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)];
        assert_eq!(compute_area(&bowtie), 0.0);
    }

    #[test]
    fn repeated_closing_vertex_is_harmless() {
        let open = [(0.0, 0.0), (3.0, 0.0), (3.0, 2.0), (0.0, 2.0)];
        let closed = [(0.0, 0.0), (3.0, 0.0), (3.0, 2.0), (0.0, 2.0), (0.0, 0.0)];
        assert_eq!(compute_area(&open), compute_area(&closed));
    }

    #[test]
    fn centroid_of_rectangle() {
        let rect = [(1.0, 1.0), (5.0, 1.0), (5.0, 3.0), (1.0, 3.0)];
        let c = centroid(&rect, AreaCfg::default()).unwrap();
        assert!((c.x - 3.0).abs() < 1e-12);
        assert!((c.y - 2.0).abs() < 1e-12);
        let line = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)];
        assert!(centroid(&line, AreaCfg::default()).is_none());
    }

    #[test]
    fn centroid_of_small_plot_far_from_origin() {
        // ~10 m square in degrees at Mumbai.
        let (lat, lng, d): (f64, f64, f64) = (19.0760, 72.8777, 9e-5);
        let plot = [[lat, lng], [lat, lng + d], [lat + d, lng + d], [lat + d, lng]];
        let c = centroid(&plot, AreaCfg::default()).unwrap();
        assert!((c.x - (lat + d / 2.0)).abs() < 1e-11, "{c:?}");
        assert!((c.y - (lng + d / 2.0)).abs() < 1e-11, "{c:?}");
    }

    #[test]
    fn perimeter_and_edges() {
        let tri = [(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)];
        assert_eq!(edge_lengths(&tri), vec![4.0, 5.0, 3.0]);
        assert_eq!(perimeter(&tri), 12.0);
        // Two vertices: out and back.
        assert_eq!(perimeter(&[(0.0, 0.0), (0.0, 2.0)]), 4.0);
        assert_eq!(perimeter(&[(1.0, 1.0)]), 0.0);
        assert!(edge_lengths::<(f64, f64)>(&[]).is_empty());
    }
}
