//! (latitude, longitude) rings: geodesic measures and a local planar frame.
//!
//! `compute_area` on raw map coordinates yields degrees². Physical measures go
//! through `geo`: `geo_area_m2` is the geodesic area on the WGS84 ellipsoid and
//! `geo_edge_lengths_m` the geodesic edge lengths.
//!
//! `LocalFrame` is an equirectangular map around the ring's mean position,
//! scaled by the mean Earth radius, for planar predicates that need metric
//! coordinates (orientation, centroid). Longitude differences are wrapped into
//! (-180, 180], so rings straddling the antimeridian stay compact.

use geo::algorithm::geodesic_area::GeodesicArea;
use geo::orient::{Direction, Orient};
use geo::{Coord as GeoCoord, GeodesicDistance, LineString, Point, Polygon};
use nalgebra::Vector2;

use crate::cfg::EARTH_RADIUS_M;
use crate::coord::{Coord, Vertex};

/// Wrap a longitude (difference) into (-180, 180].
#[inline]
pub(crate) fn wrap_lng(d: f64) -> f64 {
    let w = (d + 180.0).rem_euclid(360.0) - 180.0;
    if w == -180.0 {
        180.0
    } else {
        w
    }
}

/// Equirectangular frame centered at `(lat0, lng0)`; `x` east, `y` north, meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalFrame {
    pub lat0: f64,
    pub lng0: f64,
}

impl LocalFrame {
    /// Frame at the mean vertex. Longitudes are averaged as offsets from the
    /// first vertex, so an antimeridian ring centers near ±180. `None` if empty.
    pub fn around<V: Vertex>(latlng: &[V]) -> Option<Self> {
        let first = latlng.first()?;
        let lng_ref = first.y();
        let n = latlng.len() as f64;
        let (sum_lat, sum_dlng) = latlng.iter().fold((0.0, 0.0), |(a, b), v| {
            (a + v.x(), b + wrap_lng(v.y() - lng_ref))
        });
        Some(Self {
            lat0: sum_lat / n,
            lng0: wrap_lng(lng_ref + sum_dlng / n),
        })
    }

    #[inline]
    fn k_east(&self) -> f64 {
        EARTH_RADIUS_M * self.lat0.to_radians().cos()
    }

    /// `(lat°, lng°)` → local `(east, north)` meters.
    #[inline]
    pub fn project<V: Vertex>(&self, v: &V) -> Coord {
        let east = wrap_lng(v.y() - self.lng0).to_radians() * self.k_east();
        let north = (v.x() - self.lat0).to_radians() * EARTH_RADIUS_M;
        Vector2::new(east, north)
    }

    /// Local `(east, north)` meters → `(lat°, lng°)`, longitude in (-180, 180].
    #[inline]
    pub fn unproject(&self, p: Coord) -> Coord {
        let lat = self.lat0 + (p.y / EARTH_RADIUS_M).to_degrees();
        let lng = wrap_lng(self.lng0 + (p.x / self.k_east()).to_degrees());
        Vector2::new(lat, lng)
    }
}

/// Project `(lat°, lng°)` vertices into their `LocalFrame`. Empty input gives
/// an empty ring.
pub fn project_equirectangular<V: Vertex>(latlng: &[V]) -> Vec<Coord> {
    match LocalFrame::around(latlng) {
        Some(frame) => latlng.iter().map(|v| frame.project(v)).collect(),
        None => Vec::new(),
    }
}

/// `geo` points `(x = lng, y = lat)`, longitudes unwrapped relative to the
/// first vertex so the planar ring does not jump across the antimeridian.
fn geo_points<V: Vertex>(latlng: &[V]) -> Vec<GeoCoord<f64>> {
    let Some(first) = latlng.first() else {
        return Vec::new();
    };
    let lng_ref = first.y();
    latlng
        .iter()
        .map(|v| GeoCoord {
            x: lng_ref + wrap_lng(v.y() - lng_ref),
            y: v.x(),
        })
        .collect()
}

/// Unsigned geodesic area in m² of a `(lat°, lng°)` ring; `0.0` below three vertices.
pub fn geo_area_m2<V: Vertex>(latlng: &[V]) -> f64 {
    if latlng.len() < 3 {
        return 0.0;
    }
    let polygon = Polygon::new(LineString::from(geo_points(latlng)), vec![]);
    polygon
        .orient(Direction::Default)
        .geodesic_area_unsigned()
}

/// Geodesic length in meters of each edge `i → (i + 1) mod n`.
/// Empty for fewer than two vertices.
pub fn geo_edge_lengths_m<V: Vertex>(latlng: &[V]) -> Vec<f64> {
    let n = latlng.len();
    if n < 2 {
        return Vec::new();
    }
    let pts: Vec<Point<f64>> = geo_points(latlng).into_iter().map(Point::from).collect();
    (0..n)
        .map(|i| pts[i].geodesic_distance(&pts[(i + 1) % n]))
        .collect()
}
