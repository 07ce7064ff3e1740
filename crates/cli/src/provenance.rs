//! `<stem>.provenance.json` sidecars next to result files.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Job parameters and run tags recorded with a result.
pub struct Payload {
    pub params: Value,
    pub tags: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tags.extend(tag);
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// On-disk sidecar document.
#[derive(Serialize)]
pub struct Record {
    pub code_rev: String,
    pub crate_version: &'static str,
    callsite: Option<Callsite>,
    pub tags: Vec<String>,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Record {
    /// Record without a call site, as printed by `cli report`.
    pub fn bare(tags: Vec<String>) -> Self {
        Self {
            code_rev: current_git_rev(),
            crate_version: matgeo::VERSION,
            callsite: None,
            tags,
            params: Value::Object(Default::default()),
            outputs: Vec::new(),
        }
    }
}

/// Write the sidecar for `artifact`, creating parent directories.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let caller = Location::caller();
    let record = Record {
        callsite: Some(Callsite {
            file: caller.file(),
            line: caller.line(),
        }),
        params: payload.params,
        outputs: vec![artifact.display().to_string()],
        ..Record::bare(payload.tags)
    };

    let path = provenance_path(artifact);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let body = serde_json::to_vec_pretty(&record)?;
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance written");
    Ok(path)
}

/// `out/result.json` -> `out/result.provenance.json`.
pub fn provenance_path(artifact: &Path) -> PathBuf {
    if artifact.file_name().is_none() {
        return artifact.join("result.provenance.json");
    }
    artifact.with_extension("provenance.json")
}

/// First non-empty of: build-time `GIT_COMMIT`, runtime `GIT_COMMIT`,
/// `git rev-parse HEAD`; `"unknown"` otherwise.
pub fn current_git_rev() -> String {
    let baked = option_env!("GIT_COMMIT").map(str::to_string);
    let runtime = std::env::var("GIT_COMMIT").ok();
    baked
        .into_iter()
        .chain(runtime)
        .chain(std::iter::once_with(git_head).flatten())
        .map(|rev| rev.trim().to_string())
        .find(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/out/result.json"));
        assert_eq!(derived, Path::new("/tmp/out/result.provenance.json"));
        let bare = provenance_path(Path::new("out/result"));
        assert_eq!(bare, Path::new("out/result.provenance.json"));
    }

    #[test]
    fn sidecar_records_params_and_tags() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested").join("r.json");
        let payload = Payload::new(json!({"task": "tangents", "r": 5.0}))
            .with_tag(Some("batch-7".into()));
        let path = write_sidecar(&artifact, payload).unwrap();
        assert!(path.exists());
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["outputs"][0], artifact.display().to_string());
        assert_eq!(doc["params"]["task"], "tangents");
        assert_eq!(doc["tags"], json!(["batch-7"]));
        assert!(doc["callsite"]["line"].as_u64().unwrap() > 0);
    }

    #[test]
    fn bare_record_has_no_callsite() {
        let doc = serde_json::to_value(Record::bare(vec![])).unwrap();
        assert_eq!(doc["callsite"], Value::Null);
        assert_eq!(doc["outputs"], json!([]));
        assert!(!doc["code_rev"].as_str().unwrap().is_empty());
    }
}
