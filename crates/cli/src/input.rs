//! Boundary loaders: JSON rings and CSV vertex tables.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use parcel_geom::Coord;
use polars::prelude::*;
use serde::Deserialize;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Guess from the file extension; anything but `.csv` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Json,
        }
    }
}

/// Column name pairs recognized in CSV headers, in priority order.
const CSV_AXES: [(&str, &str); 4] = [
    ("x", "y"),
    ("lat", "lng"),
    ("lat", "lon"),
    ("latitude", "longitude"),
];

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVertex {
    Pair([f64; 2]),
    LatLng {
        lat: f64,
        #[serde(alias = "lon")]
        lng: f64,
    },
    Xy {
        x: f64,
        y: f64,
    },
}

impl RawVertex {
    fn to_coord(&self) -> Coord {
        match *self {
            RawVertex::Pair([x, y]) => Coord::new(x, y),
            RawVertex::LatLng { lat, lng } => Coord::new(lat, lng),
            RawVertex::Xy { x, y } => Coord::new(x, y),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBoundary {
    Ring(Vec<RawVertex>),
    Wrapped {
        #[serde(alias = "boundary")]
        coordinates: Vec<RawVertex>,
    },
}

/// Load a ring from `path`, using `format` or the extension.
pub fn load_boundary(path: &Path, format: Option<InputFormat>) -> Result<Vec<Coord>> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    let coords = match format {
        InputFormat::Json => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            parse_json(&bytes).with_context(|| format!("parsing {}", path.display()))?
        }
        InputFormat::Csv => read_csv(path)?,
    };
    tracing::debug!(path = %path.display(), ?format, vertices = coords.len(), "boundary_loaded");
    Ok(coords)
}

/// Parse a JSON ring: `[[x, y], ..]`, `[{lat, lng}, ..]`, `[{x, y}, ..]`, or an
/// object with a `coordinates`/`boundary` array of those.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<Coord>> {
    let raw: RawBoundary =
        serde_json::from_slice(bytes).context("expected an array of [x, y] pairs or points")?;
    let verts = match raw {
        RawBoundary::Ring(v) => v,
        RawBoundary::Wrapped { coordinates } => coordinates,
    };
    let coords: Vec<Coord> = verts.iter().map(RawVertex::to_coord).collect();
    check_finite(&coords)?;
    Ok(coords)
}

fn read_csv(path: &Path) -> Result<Vec<Coord>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let (cx, cy) = pick_axes(&df)?;
    let xs = float_column(&df, &cx)?;
    let ys = float_column(&df, &cy)?;
    let mut coords = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => coords.push(Coord::new(x, y)),
            _ => bail!("row {}: missing {} or {}", row + 1, cx, cy),
        }
    }
    check_finite(&coords)?;
    Ok(coords)
}

/// Choose the coordinate columns: a known header pair, else the first two columns.
fn pick_axes(df: &DataFrame) -> Result<(String, String)> {
    let names: Vec<String> = df.get_columns().iter().map(|s| s.name().to_string()).collect();
    let find = |want: &str| {
        names
            .iter()
            .find(|n| n.trim().eq_ignore_ascii_case(want))
            .cloned()
    };
    for (a, b) in CSV_AXES {
        if let (Some(x), Some(y)) = (find(a), find(b)) {
            return Ok((x, y));
        }
    }
    match names.as_slice() {
        [x, y, ..] => Ok((x.clone(), y.clone())),
        _ => bail!("expected at least two columns, found {}", names.len()),
    }
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let s = df
        .column(name)?
        .cast(&DataType::Float64)
        .with_context(|| format!("column {name} is not numeric"))?;
    Ok(s.f64()?.into_iter().collect())
}

fn check_finite(coords: &[Coord]) -> Result<()> {
    if let Some(i) = coords.iter().position(|c| !(c.x.is_finite() && c.y.is_finite())) {
        bail!("vertex {i} is not finite");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn json_layouts() {
        let pairs = parse_json(br#"[[0, 0], [4, 0], [0, 3]]"#).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1], Coord::new(4.0, 0.0));

        let objs = parse_json(br#"[{"lat": 19.1, "lng": 72.8}, {"lat": 19.2, "lon": 72.9}]"#)
            .unwrap();
        assert_eq!(objs[1], Coord::new(19.2, 72.9));

        let wrapped = parse_json(br#"{"boundary": [{"x": 1, "y": 2}]}"#).unwrap();
        assert_eq!(wrapped, vec![Coord::new(1.0, 2.0)]);

        assert!(parse_json(br#"{"nope": 1}"#).is_err());
        assert!(parse_json(br#"[[1, "a"]]"#).is_err());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a/b.CSV")), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("a/b.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("ring")), InputFormat::Json);
    }

    #[test]
    fn csv_with_latlng_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plot.csv");
        fs::write(&path, "id,lat,lng\n1,0,0\n2,0,2\n3,2,2\n4,2,0\n").unwrap();
        let coords = load_boundary(&path, None).unwrap();
        assert_eq!(coords.len(), 4);
        assert_eq!(coords[2], Coord::new(2.0, 2.0));
        assert_eq!(parcel_geom::compute_area(&coords), 4.0);
    }

    #[test]
    fn csv_falls_back_to_first_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring.txt");
        fs::write(&path, "a,b\n0,0\n4,0\n0,3\n").unwrap();
        let coords = load_boundary(&path, Some(InputFormat::Csv)).unwrap();
        assert_eq!(parcel_geom::compute_area(&coords), 6.0);
    }

    #[test]
    fn csv_missing_value_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "x,y\n0,0\n1,\n").unwrap();
        let err = load_boundary(&path, None).unwrap_err();
        assert!(err.to_string().contains("row 2"), "{err}");
    }
}
