use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use parcel_geom::{AreaCfg, AreaUnit};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod report;

use input::InputFormat;
use report::Mode;

#[derive(Parser)]
#[command(name = "parcel-area")]
#[command(about = "Area and boundary measures for parcel rings")]
struct Cmd {
    /// Signed areas at or below this count as degenerate
    #[arg(long, global = true, default_value_t = AreaCfg::default().eps_area)]
    eps_area: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the area of a boundary ring read from JSON or CSV
    Area {
        #[arg(long)]
        input: PathBuf,
        /// Defaults to the file extension
        #[arg(long, value_enum)]
        format: Option<InputFormat>,
        /// Read vertices as (lat, lng) degrees and report square meters
        #[arg(long)]
        geo: bool,
        /// Extra unit for geo reports
        #[arg(long, default_value = "sqm")]
        unit: AreaUnit,
        /// Write the report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Convert an area between registry units
    Units {
        #[arg(long)]
        value: f64,
        #[arg(long)]
        from: AreaUnit,
        #[arg(long)]
        to: AreaUnit,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = AreaCfg {
        eps_area: cmd.eps_area,
    };
    match cmd.action {
        Action::Area {
            input,
            format,
            geo,
            unit,
            out,
        } => area(&input, format, geo, unit, out.as_deref(), cfg),
        Action::Units { value, from, to } => units(value, from, to),
        Action::Report => report(),
    }
}

fn area(
    input: &Path,
    format: Option<InputFormat>,
    geo: bool,
    unit: AreaUnit,
    out: Option<&Path>,
    cfg: AreaCfg,
) -> Result<()> {
    let mode = if geo { Mode::Geo } else { Mode::Planar };
    tracing::info!(input = %input.display(), ?mode, %unit, "area");
    let coords = input::load_boundary(input, format)?;
    if coords.len() < 3 {
        tracing::warn!(vertices = coords.len(), "fewer than 3 vertices; area is zero");
    }
    let rep = report::build_report(&coords, mode, unit, cfg);
    tracing::info!(area = rep.area, orientation = rep.orientation, "computed");

    match out {
        None => print_json(&rep),
        Some(out) => {
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(out, serde_json::to_vec_pretty(&rep)?)
                .with_context(|| format!("writing {}", out.display()))?;
            let payload = provenance::Payload::new(serde_json::json!({
                "mode": mode,
                "unit": unit.to_string(),
                "eps_area": cfg.eps_area,
            }))
            .with_input(input);
            let prov = provenance::write_sidecar(out, payload)?;
            tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
            Ok(())
        }
    }
}

fn units(value: f64, from: AreaUnit, to: AreaUnit) -> Result<()> {
    print_json(&units_json(value, from, to))
}

fn units_json(value: f64, from: AreaUnit, to: AreaUnit) -> serde_json::Value {
    let result = AreaUnit::convert(value, from, to);
    tracing::debug!(value, %from, %to, result, "units");
    serde_json::json!({
        "value": value,
        "from": from.to_string(),
        "to": to.to_string(),
        "result": result,
    })
}

fn report() -> Result<()> {
    print_json(&provenance::header())
}

fn print_json<T: Serialize>(v: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(v)?);
    Ok(())
}
