//! Print area, perimeter, and unit conversions for a sample survey plot.
//!
//! Usage:
//!   cargo run -p parcel-geom --example plot_areas

use parcel_geom::prelude::*;

fn main() {
    // Boundary as a map layer hands it over: [lat, lng] rows.
    let plot = [
        [19.0760, 72.8777],
        [19.0760, 72.8786],
        [19.0768, 72.8790],
        [19.0769, 72.8777],
    ];
    let cfg = AreaCfg::default();
    println!("raw shoelace area: {:.3e} deg^2", compute_area(&plot));

    let local = project_equirectangular(&plot);
    let m2 = geo_area_m2(&plot);
    println!(
        "geodesic area: {m2:.1} m^2 (local plane: {:.1} m^2)",
        compute_area(&local)
    );
    println!("orientation: {:?}", orientation(&local, cfg));
    let edges = geo_edge_lengths_m(&plot);
    println!("perimeter: {:.1} m", edges.iter().sum::<f64>());
    for (i, len) in edges.iter().enumerate() {
        println!("  edge {i}: {len:.1} m");
    }
    for unit in AreaUnit::ALL {
        println!("{:>10.3} {unit}", unit.from_square_meters(m2));
    }
}
