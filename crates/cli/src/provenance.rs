//! Sidecar JSON recording how a solution file was produced.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run parameters stored in the sidecar.
pub struct Payload {
    pub params: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params }
    }
}

/// Write `<stem>.provenance.json` next to `solution`.
pub fn write_sidecar(solution: &Path, payload: Payload) -> Result<PathBuf> {
    let path = sidecar_path(solution);
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": origami::VERSION,
        "params": payload.params,
        "outputs": [solution.to_string_lossy()]
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance written");
    Ok(path)
}

fn sidecar_path(solution: &Path) -> PathBuf {
    let mut name = solution
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "solution".into());
    name.push(".provenance.json");
    solution.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then the runtime variable, then `git rev-parse`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
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
