use crate::adapters::process_runner::SandboxedRunner;
use crate::adapters::prompt_collector::PromptCollector;
use crate::adapters::registry::FsScriptRegistry;
use crate::adapters::schema_store::TomlSchemaStore;
use crate::domain::{ArgumentValues, ExecutionResult, Script};
use crate::history;
use crate::playbooks::Playbooks;
use crate::ports::ScriptRegistry;
use crate::use_cases::{LaunchOutcome, LaunchService};
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug)]
pub struct RunOptions {
    pub script: String,
    pub presets: ArgumentValues,
    pub playbooks_dir: PathBuf,
}

pub fn print_run_help() {
    println!(
        "Usage: red2net run <script> [-name value ...]\n\n\
Examples:\n\
  red2net run probe.sh -iface eth0\n\
  red2net run scan.py -target 10.0.0.5 -ports 22,80\n\n\
Notes:\n\
  Values given here preset the matching schema arguments; any remaining\n\
  arguments are prompted on stdin. The playbook runs under sudo with a\n\
  restricted PATH, from the playbook directory.\n\n\
Environment:\n\
  RED2NET_PLAYBOOKS_DIR  Playbook directory override"
    );
}

pub fn wants_help(args: &[String]) -> bool {
    // Only the leading position counts: later `-h` tokens are preset flags.
    matches!(args.first().map(String::as_str), Some("-h") | Some("--help"))
}

pub fn parse_run_args(
    args: &[String],
    playbooks_dir: PathBuf,
) -> Result<RunOptions, Box<dyn Error>> {
    if args.is_empty() {
        return Err("Missing playbook name. Use `red2net run <script>`.".into());
    }

    let script = args[0].clone();
    let mut presets = ArgumentValues::new();
    let mut remaining = args[1..].iter();
    while let Some(flag) = remaining.next() {
        let name = flag
            .strip_prefix('-')
            .filter(|name| !name.is_empty())
            .ok_or_else(|| format!("Expected -name, got `{}`", flag))?;
        let value = remaining
            .next()
            .ok_or_else(|| format!("Missing value for -{}", name))?;
        presets.insert(name.to_string(), value.clone());
    }

    Ok(RunOptions {
        script,
        presets,
        playbooks_dir,
    })
}

pub fn run_script(options: RunOptions) -> Result<(), Box<dyn Error>> {
    let playbooks = Playbooks::new(options.playbooks_dir);
    let script = find_script(&playbooks, &options.script)?;

    let service = LaunchService::new(
        Box::new(FsScriptRegistry::new(playbooks.root().to_path_buf())),
        Box::new(TomlSchemaStore::new(playbooks.arguments_path().to_path_buf())),
        Box::new(SandboxedRunner::new(playbooks.root().to_path_buf())),
    );
    let mut collector = PromptCollector::stdio(options.presets);

    match service.launch(&script, &mut collector) {
        Ok(LaunchOutcome::Cancelled) => {
            eprintln!("Cancelled.");
            Ok(())
        }
        Ok(LaunchOutcome::Completed { command, output }) => {
            let exit_code = output.exit_code.unwrap_or(1);
            let entry = history::run_entry(&script.name, command.tokens().to_vec(), output.clone());
            let _ = history::record_entry(&playbooks, &entry);

            println!("$ {}", command);
            match output.into_result() {
                ExecutionResult::Success(stdout) => {
                    if !stdout.trim().is_empty() {
                        print!("{}", stdout);
                        if !stdout.ends_with('\n') {
                            println!();
                        }
                    }
                    Ok(())
                }
                ExecutionResult::Failure(stderr) => {
                    eprintln!("Error: {}", stderr.trim_end());
                    std::process::exit(exit_code);
                }
            }
        }
        Err(err) => {
            let entry = history::error_entry(&script.name, Vec::new(), err.to_string());
            let _ = history::record_entry(&playbooks, &entry);
            Err(err.into())
        }
    }
}

fn find_script(playbooks: &Playbooks, name: &str) -> Result<Script, Box<dyn Error>> {
    let registry = FsScriptRegistry::new(playbooks.root().to_path_buf());
    registry
        .list()?
        .into_iter()
        .find(|script| script.name == name)
        .ok_or_else(|| format!("Playbook not found: {}", name).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn test_parse_script_and_presets() {
        let options = parse_run_args(
            &args(&["scan.py", "-target", "10.0.0.5", "-ports", "22,80"]),
            PathBuf::from("playbooks"),
        )
        .unwrap();
        assert_eq!(options.script, "scan.py");
        assert_eq!(options.presets["target"], "10.0.0.5");
        assert_eq!(options.presets["ports"], "22,80");
    }

    #[test]
    fn test_parse_rejects_stray_token() {
        let err = parse_run_args(&args(&["scan.py", "target"]), PathBuf::from("playbooks"))
            .unwrap_err();
        assert!(err.to_string().contains("Expected -name"));
    }

    #[test]
    fn test_parse_rejects_missing_value() {
        let err = parse_run_args(&args(&["scan.py", "-target"]), PathBuf::from("playbooks"))
            .unwrap_err();
        assert!(err.to_string().contains("Missing value for -target"));
    }

    #[test]
    fn test_parse_requires_script() {
        assert!(parse_run_args(&[], PathBuf::from("playbooks")).is_err());
    }

    #[test]
    fn test_wants_help_only_in_leading_position() {
        assert!(wants_help(&args(&["--help"])));
        assert!(wants_help(&args(&["-h"])));
        assert!(!wants_help(&args(&["scan.py", "-h", "value"])));
    }
}
