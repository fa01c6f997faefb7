use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters recorded next to a written report.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input<P: AsRef<Path>>(mut self, input: P) -> Self {
        self.inputs
            .push(input.as_ref().to_string_lossy().into_owned());
        self
    }
}

/// Common provenance fields: tool name, library version, code revision.
pub fn header() -> Value {
    json!({
        "tool": "parcel-area",
        "version": parcel_geom::VERSION,
        "code_rev": current_git_rev(),
    })
}

/// Write `<artifact>.provenance.json` containing the header, callsite, inputs, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = header();
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    doc["inputs"] = json!(payload.inputs);
    doc["params"] = payload.params;
    doc["outputs"] = json!([artifact.to_string_lossy()]);
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(report: &Path) -> PathBuf {
    let stem = match report.file_stem() {
        Some(s) => s.to_string_lossy(),
        None => "report".into(),
    };
    report.with_file_name(format!("{stem}.provenance.json"))
}

/// Code revision: `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/plots/plot-17.json");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/plots/plot-17.provenance.json"));
        assert_eq!(
            provenance_path(Path::new("/")),
            Path::new("/report.provenance.json")
        );
    }

    #[test]
    fn header_names_tool_and_version() {
        let h = header();
        assert_eq!(h["tool"], "parcel-area");
        assert_eq!(h["version"], parcel_geom::VERSION);
        let rev = h["code_rev"].as_str().unwrap();
        assert!(!rev.is_empty());
        assert_eq!(rev, current_git_rev());
    }

    #[test]
    fn write_sidecar_records_inputs_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("area.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(json!({"unit": "acre"})).with_input("plot.csv");
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["tool"], "parcel-area");
        assert_eq!(parsed["inputs"][0], "plot.csv");
        assert_eq!(parsed["params"]["unit"], "acre");
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
    }
}
