use crate::domain::{ArgumentSchema, ArgumentValues, CommandLine, ExecutionResult, Script};
use crate::error::LaunchError;

pub trait ScriptRegistry {
    /// Enumerates the playbooks currently on disk. Fresh scan per call.
    fn list(&self) -> Result<Vec<Script>, LaunchError>;
}

pub trait SchemaStore {
    /// Resolves the argument schema for a script name. `None` means the
    /// document is missing or has no entry; either way the run cannot
    /// proceed.
    fn resolve(&self, script_name: &str) -> Result<Option<ArgumentSchema>, LaunchError>;
}

/// Outcome of a modal argument-collection step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    Values(ArgumentValues),
    Cancelled,
}

pub trait ArgumentCollector {
    /// Blocks until the operator supplies a value for every schema name or
    /// cancels. Values come back verbatim; empty strings are valid.
    fn collect(&mut self, schema: &ArgumentSchema) -> Result<Collection, LaunchError>;
}

/// Captured streams and exit status of one finished child process.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
    pub success: bool,
}

impl RunOutput {
    pub fn into_result(self) -> ExecutionResult {
        if self.success {
            ExecutionResult::Success(self.stdout)
        } else {
            ExecutionResult::Failure(self.stderr)
        }
    }
}

pub trait ProcessRunner {
    /// Spawns the command and waits for it synchronously. An `Err` means
    /// the process never started; a nonzero exit is an `Ok` with
    /// `success == false`.
    fn run(&self, command: &CommandLine) -> Result<RunOutput, LaunchError>;
}
