use crate::domain::python_program;
use std::error::Error;
use std::process::Command;

pub(crate) fn ensure_sudo_installed() -> Result<(), Box<dyn Error>> {
    match Command::new("sudo").arg("--version").output() {
        Ok(output) => {
            if output.status.success() {
                Ok(())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let message = stderr.trim();
                if message.is_empty() {
                    Err("sudo found, but `sudo --version` failed".into())
                } else {
                    Err(format!("sudo found, but `sudo --version` failed: {}", message).into())
                }
            }
        }
        Err(err) => Err(format!(
            "sudo not found in PATH. Every playbook runs elevated, so sudo is required: {}",
            err
        )
        .into()),
    }
}

pub(crate) fn ensure_python_installed() -> Result<(), Box<dyn Error>> {
    let program = python_program();
    match Command::new(program).arg("--version").output() {
        Ok(output) => {
            if output.status.success() {
                Ok(())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let message = stderr.trim();
                if message.is_empty() {
                    Err(format!("{} found, but `--version` failed", program).into())
                } else {
                    Err(format!(
                        "{} found, but `--version` failed: {}",
                        program, message
                    )
                    .into())
                }
            }
        }
        Err(err) => Err(format!(
            "{} not found in PATH. Needed only for .py playbooks: {}",
            program, err
        )
        .into()),
    }
}
