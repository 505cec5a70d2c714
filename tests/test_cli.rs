use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

const TEMP_FILES: [&str; 3] = [
    ".tsconfig.lint.temp.json",
    ".tsfmt.temp.json",
    ".tslint.temp.json",
];

fn tstidy() -> Command {
    Command::cargo_bin("tstidy").unwrap()
}

#[test]
fn test_version_flag() -> anyhow::Result<()> {
    let result = tstidy().arg("-v").output()?;
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("tstidy"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn test_help_lists_all_options() -> anyhow::Result<()> {
    let result = tstidy().arg("--help").output()?;
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    for flag in ["--exclude", "--all", "--tsconfig", "--nounusedvar", "--ignorepattern"] {
        assert!(stdout.contains(flag), "help is missing {flag}");
    }
    Ok(())
}

#[test]
fn test_missing_tsconfig_is_a_clean_failure() -> anyhow::Result<()> {
    let dir = tempdir()?;

    let result = tstidy().current_dir(dir.path()).output()?;
    assert_eq!(result.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("tsconfig.json"));
    assert!(stdout.contains("Something went wrong while running tstidy"));

    // cleanup must have run even though setup failed partway through
    for name in TEMP_FILES {
        assert!(!dir.path().join(name).exists(), "{name} was left behind");
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_custom_tsconfig_path_is_used_verbatim() -> anyhow::Result<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("tsconfig.app.json"),
        r#"{"compilerOptions": {}, "exclude": ["coverage"]}"#,
    )?;

    // No toolchain in the test environment, so the run fails at the compiler
    // stage, but the banner must already show the custom path and its
    // exclude list, unmodified.
    let result = tstidy()
        .current_dir(dir.path())
        .args(["-c", "tsconfig.app.json"])
        .output()?;
    assert_eq!(result.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("tsconfig: tsconfig.app.json"));
    assert!(stdout.contains("  coverage"));

    for name in TEMP_FILES {
        assert!(!dir.path().join(name).exists(), "{name} was left behind");
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_all_merges_user_excludes_into_temp_project() -> anyhow::Result<()> {
    let dir = tempdir()?;

    let result = tstidy()
        .current_dir(dir.path())
        .args(["-a", "-e", "dist/**"])
        .output()?;
    assert_eq!(result.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Starting tstidy with the following configuration:"));
    // base excludes first, then the user's glob
    assert!(stdout.contains("  node_modules"));
    assert!(stdout.contains("  dist/**"));
    // the temporary project document is the active config
    assert!(stdout.contains(".tsconfig.lint.temp.json"));

    for name in TEMP_FILES {
        assert!(!dir.path().join(name).exists(), "{name} was left behind");
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_invalid_ignorepattern_is_rejected() -> anyhow::Result<()> {
    let dir = tempdir()?;

    let result = tstidy()
        .current_dir(dir.path())
        .args(["-n", "-p", "(["])
        .output()?;
    assert_eq!(result.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("invalid --ignorepattern"));

    dir.close()?;
    Ok(())
}
