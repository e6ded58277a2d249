use crate::playbooks::Playbooks;
use std::env;
use std::error::Error;
use std::path::PathBuf;

pub struct ConfigOptions {
    pub playbooks_dir: PathBuf,
}

pub fn print_config_help() {
    println!(
        "Usage: red2net config\n\n\
Aliases:\n\
  env\n\n\
Notes:\n\
  Prints resolved playbook paths and environment overrides.\n\n\
Environment:\n\
  RED2NET_PLAYBOOKS_DIR  Playbook directory override"
    );
}

pub fn parse_config_args(
    args: &[String],
    playbooks_dir: PathBuf,
) -> Result<ConfigOptions, Box<dyn Error>> {
    if !args.is_empty() {
        return Err("config does not accept arguments".into());
    }
    Ok(ConfigOptions { playbooks_dir })
}

pub fn run_config(options: ConfigOptions) -> Result<(), Box<dyn Error>> {
    let exe = env::current_exe()?;
    let playbooks = Playbooks::new(options.playbooks_dir);
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Binary: {}", exe.display());
    println!("Playbook root: {}", playbooks.root().display());
    println!("Arguments file: {}", playbooks.arguments_path().display());
    println!("History dir: {}", playbooks.history_dir().display());
    println!("Banner file: {}", playbooks.banner_path().display());

    if let Ok(value) = env::var("RED2NET_PLAYBOOKS_DIR") {
        println!("RED2NET_PLAYBOOKS_DIR: {}", value);
    }

    Ok(())
}
