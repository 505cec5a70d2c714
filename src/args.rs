use clap::{ArgAction, Parser};

use crate::logging::LogLevel;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    disable_version_flag = true,
    name = "tstidy",
    about = "tstidy: An opinionated lint fixer and formatter for TypeScript projects."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "version",
        action = ArgAction::Version,
        help = "Print tstidy version."
    )]
    version: Option<bool>,
    #[arg(
        short,
        long,
        value_name = "GLOB",
        help = "Specify globs to exclude. Use with the --all option."
    )]
    pub exclude: Vec<String>,
    #[arg(
        short,
        long,
        default_value = "false",
        help = "Include all files specified in the resolved tsconfig.json."
    )]
    pub all: bool,
    #[arg(
        short = 'c',
        long,
        default_value = "tsconfig.json",
        help = "Provide a custom tsconfig file. This option is ignored if the --all option is used."
    )]
    pub tsconfig: String,
    #[arg(
        short = 'n',
        long,
        default_value = "false",
        help = "Disallow unused imports, variables, functions and private class members."
    )]
    pub nounusedvar: bool,
    #[arg(
        short = 'p',
        long,
        help = "Use with the --nounusedvar option to ignore variable names and imports matching the pattern provided."
    )]
    pub ignorepattern: Option<String>,
    #[arg(
        long,
        value_enum,
        default_value_t = LogLevel::default(),
        help = "Verbosity of diagnostic logging on stderr."
    )]
    pub log_level: LogLevel,
}
