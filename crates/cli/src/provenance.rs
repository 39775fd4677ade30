use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub summary: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            summary: Value::Null,
        }
    }

    pub fn with_summary(mut self, summary: Value) -> Self {
        self.summary = summary;
        self
    }
}

/// Write `<artifact>.provenance.json` with git rev, library version, callsite, params, and outputs.
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
    let mut doc = block(payload.command, payload.params);
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    doc["summary"] = payload.summary;
    doc["outputs"] = json!([artifact.to_string_lossy()]);
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// Provenance block without outputs, as printed by `cli report`.
pub fn block(command: &str, params: Value) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "lib_version": closest_pair::VERSION,
        "command": command,
        "params": params,
        "outputs": []
    })
}

/// `dir/results.csv` → `dir/results.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name: OsString = match artifact.file_stem() {
        Some(stem) => stem.to_os_string(),
        None => OsString::from("artifact"),
    };
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash: build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse`.
pub fn current_git_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(rev_parse_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn rev_parse_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string())
}
