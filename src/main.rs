mod adapters;
mod banner;
mod config;
mod doctor;
mod domain;
mod error;
mod history;
mod list;
mod playbooks;
mod ports;
mod run;
mod use_cases;
mod util;

use adapters::process_runner::SandboxedRunner;
use adapters::registry::FsScriptRegistry;
use adapters::schema_store::TomlSchemaStore;
use adapters::tui;
use playbooks::Playbooks;
use std::env;
use std::error::Error;
use std::path::PathBuf;
use use_cases::LaunchService;

fn playbooks_dir() -> PathBuf {
    if let Ok(dir) = env::var("RED2NET_PLAYBOOKS_DIR") {
        return PathBuf::from(dir);
    }

    if cfg!(debug_assertions) {
        let dev_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("playbooks");
        if dev_dir.is_dir() {
            return dev_dir;
        }
    }

    PathBuf::from("playbooks")
}

fn print_help() {
    println!(
        "Usage: red2net [command]\n\n\
Commands:\n\
  scripts   List available playbooks\n\
  run       Run a playbook without the TUI\n\
  doctor    Check runtimes and playbook paths\n\
  check     Alias for doctor\n\
  config    Show resolved paths and env\n\
  env       Alias for config\n\
\n\
Options:\n\
  -h, --help     Show this help\n\
  -V, --version  Show version\n\
\n\
With no command the interactive launcher starts. Every playbook is run\n\
under sudo with a restricted PATH-only environment."
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    if let Some(command) = args.next() {
        match command.as_str() {
            "scripts" => {
                let list_args: Vec<String> = args.collect();
                if list_args
                    .iter()
                    .any(|arg| arg == "-h" || arg == "--help")
                {
                    list::print_list_help();
                    return Ok(());
                }
                let options = list::parse_list_args(&list_args, playbooks_dir())?;
                list::run_list(options)?;
                return Ok(());
            }
            "run" => {
                let run_args: Vec<String> = args.collect();
                if run::wants_help(&run_args) {
                    run::print_run_help();
                    return Ok(());
                }
                let options = run::parse_run_args(&run_args, playbooks_dir())?;
                run::run_script(options)?;
                return Ok(());
            }
            "doctor" | "check" => {
                let doctor_args: Vec<String> = args.collect();
                if doctor_args
                    .iter()
                    .any(|arg| arg == "-h" || arg == "--help")
                {
                    doctor::print_doctor_help();
                    return Ok(());
                }
                let options = doctor::parse_doctor_args(&doctor_args, playbooks_dir())?;
                doctor::run_doctor(options)?;
                return Ok(());
            }
            "config" | "env" => {
                let config_args: Vec<String> = args.collect();
                if config_args
                    .iter()
                    .any(|arg| arg == "-h" || arg == "--help")
                {
                    config::print_config_help();
                    return Ok(());
                }
                let options = config::parse_config_args(&config_args, playbooks_dir())?;
                config::run_config(options)?;
                return Ok(());
            }
            "help" | "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "version" | "-V" | "--version" => {
                println!("red2net {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ => {}
        }
    }

    let playbooks = Playbooks::new(playbooks_dir());
    let service = LaunchService::new(
        Box::new(FsScriptRegistry::new(playbooks.root().to_path_buf())),
        Box::new(TomlSchemaStore::new(playbooks.arguments_path().to_path_buf())),
        Box::new(SandboxedRunner::new(playbooks.root().to_path_buf())),
    );

    let mut terminal = tui::setup_terminal()?;
    let app_result = tui::run_app(&mut terminal, &service, playbooks);
    tui::restore_terminal(&mut terminal)?;
    app_result?;

    Ok(())
}
