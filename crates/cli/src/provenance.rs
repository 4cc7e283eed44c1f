use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run parameters recorded next to a results file.
pub struct Sidecar {
    pub params: Value,
    pub solids: Vec<String>,
}

impl Sidecar {
    pub fn new(params: Value, solids: Vec<String>) -> Self {
        Self { params, solids }
    }
}

/// Write `<stem>.provenance.json` next to `artifact` with the code revision,
/// crate version, callsite, params and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, sidecar: Sidecar) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "platonic_version": platonic::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "solids": sidecar.solids,
        "params": sidecar.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("counts"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/output/counts.parquet"));
        assert_eq!(derived, Path::new("/tmp/output/counts.provenance.json"));
    }

    #[test]
    fn sidecar_records_solids_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("counts.csv");
        fs::write(&artifact, "").unwrap();
        let sidecar = Sidecar::new(json!({"batch_bits": 16}), vec!["cube".into()]);
        let path = write_sidecar(&artifact, sidecar).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["solids"][0], "cube");
        assert_eq!(parsed["params"]["batch_bits"], 16);
    }
}
