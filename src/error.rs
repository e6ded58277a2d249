use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a run flow. Cancellation is not an error and
/// lives in the collection/launch outcomes instead.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The playbook directory is missing or unreadable. Fatal at startup.
    #[error("Playbook directory unavailable: {path}: {source}")]
    DirectoryUnavailable { path: PathBuf, source: io::Error },

    /// No argument definition exists for the selected script.
    #[error("No argument definition found for {script}")]
    SchemaAbsent { script: String },

    /// The argument document exists but cannot be used.
    #[error("Argument document is invalid ({path}): {message}")]
    SchemaCorrupt { path: PathBuf, message: String },

    /// A collected value is missing for a schema name. The collectors
    /// supply a value for every name, so reaching this means a broken
    /// caller, not operator input.
    #[error("Missing value for argument -{name}")]
    MissingArgument { name: String },

    /// The command could not be started at all. Distinct from a process
    /// that ran and exited nonzero.
    #[error("Failed to start {program}: {source}")]
    SpawnFailure { program: String, source: io::Error },

    #[error("{0}")]
    Io(#[from] io::Error),
}
