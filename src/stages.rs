use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};

/// Runs the linter in auto-fix mode, one file at a time, in FileSet order.
/// Fixable violations are rewritten in place by tslint itself; leftover
/// violations are reported on tslint's own output and do not abort the run.
///
/// Strictly sequential: formatting must not start until every file has been
/// fixed, since the formatter is configured against the same lint rules.
pub fn run_lint(files: &[PathBuf], tslint_config: &Path) -> Result<()> {
    for file in files {
        let status = Command::new("tslint")
            .args(tslint_args(file, tslint_config))
            .status()
            .context("failed to run `tslint`; is it installed and on the PATH?")?;
        if !status.success() {
            tracing::debug!("tslint exited with {status} for {}", file.display());
        }
    }
    Ok(())
}

fn tslint_args(file: &Path, config: &Path) -> Vec<OsString> {
    vec![
        OsString::from("--fix"),
        OsString::from("--config"),
        config.into(),
        file.into(),
    ]
}

/// Runs the formatter once over the whole FileSet, rewriting files in place.
/// The temporary lint document is handed to the formatter so formatting does
/// not reintroduce violations the lint stage just fixed; editor-specific
/// configuration sources are ignored.
pub fn run_format(
    files: &[PathBuf],
    tsconfig: &Path,
    tslint_config: &Path,
    tsfmt_config: &Path,
) -> Result<()> {
    let status = Command::new("tsfmt")
        .args(tsfmt_args(files, tsconfig, tslint_config, tsfmt_config))
        .status()
        .context("failed to run `tsfmt`; is typescript-formatter installed and on the PATH?")?;
    if !status.success() {
        bail!("`tsfmt` exited with {status}");
    }
    Ok(())
}

fn tsfmt_args(
    files: &[PathBuf],
    tsconfig: &Path,
    tslint_config: &Path,
    tsfmt_config: &Path,
) -> Vec<OsString> {
    let mut args = vec![
        OsString::from("--replace"),
        OsString::from("--no-editorconfig"),
        OsString::from("--no-vscode"),
        OsString::from("--useTsconfig"),
        tsconfig.into(),
        OsString::from("--useTslint"),
        tslint_config.into(),
        OsString::from("--useTsfmt"),
        tsfmt_config.into(),
    ];
    args.extend(files.iter().map(OsString::from));
    args
}
