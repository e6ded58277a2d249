use crate::adapters::system_checks::{ensure_python_installed, ensure_sudo_installed};
use crate::playbooks::Playbooks;
use std::error::Error;
use std::path::PathBuf;

pub struct DoctorOptions {
    pub playbooks_dir: PathBuf,
}

pub fn print_doctor_help() {
    println!(
        "Usage: red2net doctor\n\n\
Aliases:\n\
  check\n\n\
Notes:\n\
  Validates runtimes and playbook paths (python is only needed for .py\n\
  playbooks).\n\n\
Environment:\n\
  RED2NET_PLAYBOOKS_DIR  Playbook directory override"
    );
}

pub fn parse_doctor_args(
    args: &[String],
    playbooks_dir: PathBuf,
) -> Result<DoctorOptions, Box<dyn Error>> {
    if !args.is_empty() {
        return Err("doctor does not accept arguments".into());
    }
    Ok(DoctorOptions { playbooks_dir })
}

pub fn run_doctor(options: DoctorOptions) -> Result<(), Box<dyn Error>> {
    let mut ok = true;
    let playbooks = Playbooks::new(options.playbooks_dir);

    println!("Checks:");
    ok &= print_required("sudo", ensure_sudo_installed());
    print_optional("python", ensure_python_installed());

    ok &= print_path("playbook_root", playbooks.root(), true);
    print_path("arguments_file", playbooks.arguments_path(), false);
    print_path("history_dir", playbooks.history_dir(), false);
    print_path("banner_file", playbooks.banner_path(), false);

    if !ok {
        println!("One or more checks failed.");
        std::process::exit(1);
    }

    println!("All checks passed.");
    Ok(())
}

fn print_required(label: &str, result: Result<(), Box<dyn Error>>) -> bool {
    match result {
        Ok(()) => {
            println!("  {}: OK", label);
            true
        }
        Err(err) => {
            println!("  {}: ERROR - {}", label, err);
            false
        }
    }
}

fn print_optional(label: &str, result: Result<(), Box<dyn Error>>) {
    match result {
        Ok(()) => {
            println!("  {}: OK", label);
        }
        Err(err) => {
            println!("  {}: WARN - {}", label, err);
        }
    }
}

fn print_path(label: &str, path: &std::path::Path, required: bool) -> bool {
    if path.exists() {
        println!("  {}: OK - {}", label, path.display());
        true
    } else if required {
        println!("  {}: ERROR - {} (missing)", label, path.display());
        false
    } else {
        println!("  {}: WARN - {} (not created yet)", label, path.display());
        true
    }
}
