pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod project;
pub mod stages;
pub mod status;
pub mod tempfiles;

pub use args::CliArgs;
pub use status::ExitStatus;
