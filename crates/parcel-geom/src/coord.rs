//! Vertex representations accepted by the area routines.
//!
//! Boundaries arrive in several shapes: `[lat, lng]` arrays from map layers,
//! tuples from hand-written fixtures, `Vector2` from our own projection. The
//! `Vertex` trait reads all of them as a plain `(x, y)` pair so the geometry
//! code is written once against slices.

use nalgebra::Vector2;

/// Planar coordinate `(x, y)`.
pub type Coord = Vector2<f64>;

/// Anything that can be read as an `(x, y)` pair.
pub trait Vertex {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    #[inline]
    fn to_coord(&self) -> Coord {
        Vector2::new(self.x(), self.y())
    }
}

impl Vertex for Vector2<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl Vertex for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Vertex for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl<V: Vertex + ?Sized> Vertex for &V {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }
    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
}
