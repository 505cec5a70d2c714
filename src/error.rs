use std::io;
use std::path::PathBuf;

/// Failure to load one of the configuration documents, either a base
/// document shipped with the tool or a tsconfig provided by the user.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .0.display(), .1)]
    Read(PathBuf, #[source] io::Error),
    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] serde_json::Error),
}
