//! Error types for justsdk modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the release pipeline.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Could not find __version__ in {}", path.display())]
    VersionNotFound { path: PathBuf },

    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Unknown version file: {}", .0.display())]
    UnknownFileTarget(PathBuf),

    #[error("Command failed: {command} (exit code {})", code.map_or("unknown".to_string(), |c| c.to_string()))]
    ExternalCommand {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("Failed to spawn {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} not found in PATH")]
    ToolNotFound(String),

    #[error("Git repository has uncommitted changes. Please commit or stash changes before publishing")]
    DirtyWorkingTree,

    #[error("Invalid TOML in {}: {reason}", path.display())]
    ManifestParse { path: PathBuf, reason: String },

    #[error(transparent)]
    File(#[from] FileError),

    #[error("Failed to remove {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReleaseError {
    /// Captured stdout/stderr of a failed command, if any.
    pub fn captured_output(&self) -> Option<(&str, &str)> {
        match self {
            ReleaseError::ExternalCommand { stdout, stderr, .. } => Some((stdout, stderr)),
            _ => None,
        }
    }
}

/// Errors from the file helpers.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
