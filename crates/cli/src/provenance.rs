//! Provenance records for artifacts written by the CLI.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsStr;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Overrides the revision lookup (e.g. in builds without a `.git` directory).
const REV_ENV: &str = "CUBENET_GIT_REV";

/// What a command recorded about one artifact.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }
}

/// Provenance block shared by sidecars and the `report` command.
pub fn block(command: &str, params: Value, inputs: &[String], outputs: &[String]) -> Value {
    json!({
        "code_rev": code_rev(),
        "version": cubenet::VERSION,
        "command": command,
        "params": params,
        "inputs": inputs,
        "outputs": outputs
    })
}

/// Write `<stem>.provenance.json` next to an artifact that already exists,
/// recording the caller's source location.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let callsite = Location::caller();
    let mut doc = block(
        payload.command,
        payload.params,
        &payload.inputs,
        &[artifact.to_string_lossy().into_owned()],
    );
    doc["callsite"] = json!({ "file": callsite.file(), "line": callsite.line() });

    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), command = payload.command, "provenance sidecar");
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .unwrap_or(OsStr::new("artifact"))
        .to_os_string();
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `CUBENET_GIT_REV` if set, else `git describe --always --dirty`, else
/// `"unknown"`.
fn code_rev() -> String {
    std::env::var(REV_ENV)
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(git_describe)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_describe() -> Option<String> {
    let out = Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?.trim().to_owned();
    (!rev.is_empty()).then_some(rev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_artifact() {
        let derived = sidecar_path(Path::new("/tmp/output/nets.json"));
        assert_eq!(derived, Path::new("/tmp/output/nets.provenance.json"));
        let bare = sidecar_path(Path::new("runs/tally"));
        assert_eq!(bare, Path::new("runs/tally.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_command_and_inputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("results.json");
        fs::write(&artifact, "[]").unwrap();
        let payload = Payload::new("batch", json!({"rows": 3})).with_input("nets.csv");
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "batch");
        assert_eq!(parsed["inputs"][0], "nets.csv");
        assert_eq!(parsed["params"]["rows"], 3);
        assert_eq!(parsed["version"], cubenet::VERSION);
        assert!(parsed["code_rev"].as_str().is_some_and(|rev| !rev.is_empty()));
        assert!(parsed["callsite"]["line"].is_u64());
    }

    #[test]
    fn report_block_has_no_outputs() {
        let doc = block("report", json!({}), &[], &[]);
        assert_eq!(doc["command"], "report");
        assert_eq!(doc["outputs"], json!([]));
        assert!(doc.get("callsite").is_none());
    }
}
