//! Planar geometry for land parcels.
//!
//! The core is a shoelace area calculator over an ordered, implicitly closed
//! ring of vertices. Around it sit the small helpers a registry caller needs:
//! orientation, centroid, boundary lengths, area units, and geodesic measures
//! for (latitude, longitude) rings.
//!
//! Conventions
//! - A vertex is `(x, y)`: first component `x`, second `y`. For map boundaries
//!   that means `(lat, lng)`; the area functions do not care.
//! - Rings are not closed explicitly. The last vertex connects to the first.
//! - Nothing here fails. Fewer than three vertices is a zero-area ring.

pub mod area;
pub mod coord;
pub mod project;
pub mod rand;
pub mod units;

mod cfg;


/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use area::{
    centroid, compute_area, compute_area_opt, edge_lengths, orientation, perimeter, signed_area,
    Orientation,
};
pub use cfg::AreaCfg;
pub use coord::{Coord, Vertex};
pub use project::{geo_area_m2, geo_edge_lengths_m, project_equirectangular, LocalFrame};
pub use units::{AreaUnit, ParseAreaUnitError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::{
        centroid, compute_area, compute_area_opt, edge_lengths, orientation, perimeter,
        signed_area, Orientation,
    };
    pub use crate::cfg::AreaCfg;
    pub use crate::coord::{Coord, Vertex};
    pub use crate::project::{
        geo_area_m2, geo_edge_lengths_m, project_equirectangular, LocalFrame,
    };
    pub use crate::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
    pub use crate::units::AreaUnit;
    pub use nalgebra::Vector2 as Vec2;
}
