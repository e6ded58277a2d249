use crate::domain::CommandLine;
use crate::error::LaunchError;
use crate::ports::{ProcessRunner, RunOutput};
use std::path::PathBuf;
use std::process::Command;

/// The only environment a playbook sees. Nothing from the launcher's own
/// environment is inherited.
pub const RESTRICTED_PATH: &str = "/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin";

/// Runs a built command synchronously: working directory pinned to the
/// playbook directory, environment scrubbed down to a fixed PATH, both
/// streams captured. No timeout and no cancellation once started.
pub struct SandboxedRunner {
    working_dir: PathBuf,
}

impl SandboxedRunner {
    pub fn new<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }
}

impl ProcessRunner for SandboxedRunner {
    fn run(&self, command: &CommandLine) -> Result<RunOutput, LaunchError> {
        let output = Command::new(command.program())
            .args(command.args())
            .current_dir(&self.working_dir)
            .env_clear()
            .env("PATH", RESTRICTED_PATH)
            .output()
            .map_err(|source| LaunchError::SpawnFailure {
                program: command.program().to_string(),
                source,
            })?;

        Ok(RunOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
            success: output.status.success(),
        })
    }
}
