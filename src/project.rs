use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};

use crate::config::ProjectConfig;
use crate::error::ConfigError;

/// Reads a project document from disk, e.g. the user's tsconfig.json.
pub fn load_project_config(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
}

/// Resolves the ordered set of source files belonging to the project by
/// delegating to the TypeScript compiler's project loading. Declaration
/// files are part of the program but are never linted or formatted.
pub fn resolve_project_files(tsconfig: &Path) -> Result<Vec<PathBuf>> {
    let output = Command::new("tsc")
        .arg("--project")
        .arg(tsconfig)
        .arg("--listFilesOnly")
        .output()
        .context("failed to run `tsc`; is TypeScript installed and on the PATH?")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let details = if stderr.trim().is_empty() {
            String::from_utf8_lossy(&output.stdout).into_owned()
        } else {
            stderr.into_owned()
        };
        bail!(
            "`tsc --project {} --listFilesOnly` failed:\n{details}",
            tsconfig.display()
        );
    }

    let files = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.ends_with(".d.ts"))
        .map(PathBuf::from)
        .collect::<Vec<_>>();

    tracing::debug!("resolved {} source file(s) from {}", files.len(), tsconfig.display());
    Ok(files)
}
