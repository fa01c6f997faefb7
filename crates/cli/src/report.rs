//! Area report assembled from a loaded ring.
//!
//! Planar mode reports raw shoelace values in input units. Geo mode reads the
//! ring as `(lat, lng)`: area and edges are geodesic meters, orientation and
//! centroid come from the local metric frame (so `eps_area` is in m²), and the
//! centroid is mapped back to `(lat, lng)`.

use parcel_geom::{
    centroid, compute_area, edge_lengths, geo_area_m2, geo_edge_lengths_m, orientation,
    perimeter, AreaCfg, AreaUnit, Coord, LocalFrame, Orientation,
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Planar,
    Geo,
}

#[derive(Debug, Serialize)]
pub struct Converted {
    pub unit: String,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct AreaReport {
    pub mode: Mode,
    pub vertices: usize,
    /// Input units² in planar mode, m² in geo mode.
    pub area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<Converted>,
    pub orientation: &'static str,
    pub perimeter: f64,
    pub edge_lengths: Vec<f64>,
    pub centroid: Option<[f64; 2]>,
}

fn orientation_name(o: Orientation) -> &'static str {
    match o {
        Orientation::CounterClockwise => "counter_clockwise",
        Orientation::Clockwise => "clockwise",
        Orientation::Degenerate => "degenerate",
    }
}

pub fn build_report(coords: &[Coord], mode: Mode, unit: AreaUnit, cfg: AreaCfg) -> AreaReport {
    match mode {
        Mode::Planar => AreaReport {
            mode,
            vertices: coords.len(),
            area: compute_area(coords),
            converted: None,
            orientation: orientation_name(orientation(coords, cfg)),
            perimeter: perimeter(coords),
            edge_lengths: edge_lengths(coords),
            centroid: centroid(coords, cfg).map(|c| [c.x, c.y]),
        },
        Mode::Geo => {
            let m2 = geo_area_m2(coords);
            let edges = geo_edge_lengths_m(coords);
            let (orient, center) = match LocalFrame::around(coords) {
                Some(frame) => {
                    let local: Vec<Coord> = coords.iter().map(|v| frame.project(v)).collect();
                    let center = centroid(&local, cfg).map(|c| {
                        let ll = frame.unproject(c);
                        [ll.x, ll.y]
                    });
                    (orientation(&local, cfg), center)
                }
                None => (Orientation::Degenerate, None),
            };
            AreaReport {
                mode,
                vertices: coords.len(),
                area: m2,
                converted: Some(Converted {
                    unit: unit.to_string(),
                    value: unit.from_square_meters(m2),
                }),
                orientation: orientation_name(orient),
                perimeter: edges.iter().sum(),
                edge_lengths: edges,
                centroid: center,
            }
        }
    }
}
