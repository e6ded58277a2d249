use crate::adapters::registry::FsScriptRegistry;
use crate::ports::ScriptRegistry;
use std::error::Error;
use std::path::PathBuf;

pub struct ListOptions {
    pub playbooks_dir: PathBuf,
}

pub fn print_list_help() {
    println!(
        "Usage: red2net scripts\n\n\
Notes:\n\
  Lists playbooks in the playbook directory (.py, .sh, .c).\n\n\
Environment:\n\
  RED2NET_PLAYBOOKS_DIR  Playbook directory override"
    );
}

pub fn parse_list_args(
    args: &[String],
    playbooks_dir: PathBuf,
) -> Result<ListOptions, Box<dyn Error>> {
    if !args.is_empty() {
        return Err("scripts does not accept arguments".into());
    }
    Ok(ListOptions { playbooks_dir })
}

pub fn run_list(options: ListOptions) -> Result<(), Box<dyn Error>> {
    let registry = FsScriptRegistry::new(options.playbooks_dir.clone());
    let scripts = registry.list()?;

    println!("Playbook folder: {}", options.playbooks_dir.display());
    if scripts.is_empty() {
        println!("(no playbooks found)");
        return Ok(());
    }

    for script in scripts {
        println!(" - {} ({})", script.name, script.kind.label());
    }

    Ok(())
}
