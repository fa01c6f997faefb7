//! Tolerances for area classification.
//!
//! Policy
//! - `compute_area` and `signed_area` use no tolerance at all; they return the
//!   raw shoelace value. Only predicates built on top (orientation, centroid)
//!   need to decide what "zero area" means.

/// Mean Earth radius in meters (IUGG).
pub(crate) const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Area tolerance configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaCfg {
    /// Absolute signed areas at or below this are treated as degenerate.
    pub eps_area: f64,
}

impl Default for AreaCfg {
    fn default() -> Self {
        Self { eps_area: 1e-12 }
    }
}
