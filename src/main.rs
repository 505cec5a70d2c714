use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use tstidy::args::CliArgs;
use tstidy::config::{
    base_format_config, base_lint_config, base_project_config, compose_lint_config, merge_excludes,
};
use tstidy::logging::init_logging;
use tstidy::project::{load_project_config, resolve_project_files};
use tstidy::stages::{run_format, run_lint};
use tstidy::status::ExitStatus;
use tstidy::tempfiles::TempConfigSet;

fn main() -> ExitCode {
    match run() {
        Ok(status) => status.into(),
        Err(err) => {
            // Everything goes to stdout, including errors, so the report
            // reads in one stream alongside the stage banners.
            println!("{err:#}");
            println!(
                "\nSomething went wrong while running tstidy. \
                 See the error and additional logs above for details.\n"
            );
            ExitStatus::Error.into()
        }
    }
}

fn run() -> Result<ExitStatus> {
    let args = CliArgs::parse();
    init_logging(args.log_level);

    if let Some(pattern) = &args.ignorepattern {
        regex::Regex::new(pattern)
            .with_context(|| format!("invalid --ignorepattern `{pattern}`"))?;
    }

    // The guard lives for the rest of the run; every exit path below goes
    // through its cleanup.
    let temp = TempConfigSet::in_current_dir()?;

    temp.write_tsfmt(&base_format_config()?)?;

    let lint_config = compose_lint_config(
        base_lint_config()?,
        args.nounusedvar,
        args.ignorepattern.as_deref(),
    );
    temp.write_tslint(&lint_config)?;

    let (active_tsconfig, excludes) = if args.all {
        let merged = merge_excludes(base_project_config()?, &args.exclude);
        temp.write_tsconfig(&merged)?;
        (temp.tsconfig_path(), merged.exclude)
    } else {
        // Read only for the exclude-list log line; the path itself is what
        // the compiler, linter, and formatter receive.
        let project = load_project_config(Path::new(&args.tsconfig))?;
        (PathBuf::from(&args.tsconfig), project.exclude)
    };

    print_banner(&active_tsconfig, &excludes);

    println!("\n{}\n", "Running tslint...".bold());
    let files = resolve_project_files(&active_tsconfig)?;
    run_lint(&files, &temp.tslint_path())?;

    println!("\n{}\n", "Running tsfmt...".bold());
    run_format(&files, &active_tsconfig, &temp.tslint_path(), &temp.tsfmt_path())?;

    println!(
        "{}",
        "tstidy linting and formatting completed successfully. \
         See additional logs above for details."
            .green()
    );

    Ok(ExitStatus::Success)
}

fn print_banner(tsconfig: &Path, excludes: &[String]) {
    println!("{}", "Starting tstidy with the following configuration:".bold());
    println!("tslint: tstidy house configuration");
    println!("tsfmt: tstidy house configuration");
    println!("tsconfig: {}", tsconfig.display());
    println!("excluded files and/or folders:");
    for glob in excludes {
        println!("  {glob}");
    }
}
