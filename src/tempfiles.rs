use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

pub const TEMP_TSCONFIG_FILE: &str = ".tsconfig.lint.temp.json";
pub const TEMP_TSFMT_FILE: &str = ".tsfmt.temp.json";
pub const TEMP_TSLINT_FILE: &str = ".tslint.temp.json";

/// Owns the three derived configuration files for the duration of a run.
///
/// Dropping the guard removes the files in fixed order (project, format,
/// lint). A file that was never written is skipped, so cleanup also works on
/// paths that fail before all three documents exist.
#[derive(Debug)]
pub struct TempConfigSet {
    dir: PathBuf,
}

impl TempConfigSet {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The temporary files live in the invoking process's working directory,
    /// next to the project being linted.
    pub fn in_current_dir() -> io::Result<Self> {
        Ok(Self::new(env::current_dir()?))
    }

    pub fn tsconfig_path(&self) -> PathBuf {
        self.dir.join(TEMP_TSCONFIG_FILE)
    }

    pub fn tsfmt_path(&self) -> PathBuf {
        self.dir.join(TEMP_TSFMT_FILE)
    }

    pub fn tslint_path(&self) -> PathBuf {
        self.dir.join(TEMP_TSLINT_FILE)
    }

    pub fn write_tsconfig(&self, doc: &impl Serialize) -> Result<()> {
        write_json(&self.tsconfig_path(), doc)
    }

    pub fn write_tsfmt(&self, doc: &impl Serialize) -> Result<()> {
        write_json(&self.tsfmt_path(), doc)
    }

    pub fn write_tslint(&self, doc: &impl Serialize) -> Result<()> {
        write_json(&self.tslint_path(), doc)
    }
}

/// Overwrites any existing file of the same name.
fn write_json(path: &Path, doc: &impl Serialize) -> Result<()> {
    let contents = serde_json::to_string(doc)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

impl Drop for TempConfigSet {
    fn drop(&mut self) {
        for path in [self.tsconfig_path(), self.tsfmt_path(), self.tslint_path()] {
            if !path.exists() {
                continue;
            }
            if let Err(e) = fs::remove_file(&path) {
                tracing::warn!("could not remove {}: {e}", path.display());
            }
        }
    }
}
