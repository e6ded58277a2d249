use crate::error::LaunchError;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Fixed privilege-elevation prefix. Every playbook runs elevated; this is
/// policy, not configuration.
pub const ELEVATION_TOKEN: &str = "sudo";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScriptKind {
    Python,
    Shell,
    Native,
}

impl ScriptKind {
    pub fn label(self) -> &'static str {
        match self {
            ScriptKind::Python => "python",
            ScriptKind::Shell => "shell",
            ScriptKind::Native => "native",
        }
    }
}

pub fn script_kind(path: &Path) -> Option<ScriptKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "py" => Some(ScriptKind::Python),
        "sh" => Some(ScriptKind::Shell),
        "c" => Some(ScriptKind::Native),
        _ => None,
    }
}

pub fn python_program() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}

/// A playbook discovered in the script directory. Immutable once read;
/// enumerated fresh on each scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub name: String,
    pub kind: ScriptKind,
    pub path: PathBuf,
}

impl Script {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let kind = script_kind(&path)?;
        let name = path.file_name()?.to_str()?.to_string();
        Some(Self { name, kind, path })
    }
}

/// Ordered argument names for one script. Order drives form layout and the
/// token order of the built command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSchema {
    names: Vec<String>,
}

impl ArgumentSchema {
    /// Rejects duplicate names; the argument document is operator-edited
    /// and a duplicate would silently drop a form field.
    pub fn new(names: Vec<String>) -> Result<Self, String> {
        for (idx, name) in names.iter().enumerate() {
            if names[..idx].contains(name) {
                return Err(format!("duplicate argument name: {}", name));
            }
        }
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

/// Collected argument values, keyed by schema name. Values are opaque
/// strings taken verbatim from the operator.
pub type ArgumentValues = HashMap<String, String>;

/// An executable token sequence: program followed by arguments. Built once,
/// consumed once; never joined into a shell string for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    pub fn new(tokens: Vec<String>) -> Self {
        debug_assert!(!tokens.is_empty());
        Self { tokens }
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for CommandLine {
    /// Display form only; execution always uses the token vector.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Builds the command line for one run. Pure: same inputs, same tokens.
///
/// Shell and native playbooks are invoked directly as `./<name>` (the
/// runner's working directory is the playbook directory); Python playbooks
/// go through the interpreter with the resolved path. Argument pairs follow
/// in schema order as `-<name> <value>`, values untouched.
pub fn build_command(
    script: &Script,
    schema: &ArgumentSchema,
    values: &ArgumentValues,
) -> Result<CommandLine, LaunchError> {
    let mut tokens = vec![ELEVATION_TOKEN.to_string()];
    match script.kind {
        ScriptKind::Shell | ScriptKind::Native => {
            tokens.push(format!("./{}", script.name));
        }
        ScriptKind::Python => {
            tokens.push(python_program().to_string());
            tokens.push(script.path.to_string_lossy().into_owned());
        }
    }

    for name in schema.names() {
        let value = values
            .get(name)
            .ok_or_else(|| LaunchError::MissingArgument { name: name.clone() })?;
        tokens.push(format!("-{}", name));
        tokens.push(value.clone());
    }

    Ok(CommandLine::new(tokens))
}

/// Outcome of one completed process run, produced exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Success(String),
    Failure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(name: &str, dir: &str) -> Script {
        Script::from_path(PathBuf::from(dir).join(name)).unwrap()
    }

    fn values(pairs: &[(&str, &str)]) -> ArgumentValues {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    fn schema(names: &[&str]) -> ArgumentSchema {
        ArgumentSchema::new(names.iter().map(|name| name.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_script_kind_mapping() {
        assert_eq!(script_kind(Path::new("scan.py")), Some(ScriptKind::Python));
        assert_eq!(script_kind(Path::new("probe.sh")), Some(ScriptKind::Shell));
        assert_eq!(script_kind(Path::new("flood.c")), Some(ScriptKind::Native));
        assert_eq!(script_kind(Path::new("SCAN.PY")), Some(ScriptKind::Python));
        assert_eq!(script_kind(Path::new("readme.md")), None);
        assert_eq!(script_kind(Path::new("noext")), None);
    }

    #[test]
    fn test_schema_rejects_duplicates() {
        let err = ArgumentSchema::new(vec!["target".to_string(), "target".to_string()])
            .unwrap_err();
        assert!(err.contains("target"));
    }

    #[test]
    fn test_build_python_command() {
        let script = script("scan.py", "/opt/playbooks");
        let command = build_command(
            &script,
            &schema(&["target", "ports"]),
            &values(&[("target", "10.0.0.5"), ("ports", "22,80")]),
        )
        .unwrap();
        assert_eq!(
            command.tokens(),
            &[
                "sudo",
                python_program(),
                "/opt/playbooks/scan.py",
                "-target",
                "10.0.0.5",
                "-ports",
                "22,80",
            ]
        );
    }

    #[test]
    fn test_build_shell_command() {
        let script = script("probe.sh", "/opt/playbooks");
        let command =
            build_command(&script, &schema(&["iface"]), &values(&[("iface", "eth0")])).unwrap();
        assert_eq!(command.tokens(), &["sudo", "./probe.sh", "-iface", "eth0"]);
    }

    #[test]
    fn test_build_native_command_runs_directly() {
        let script = script("flood.c", "/opt/playbooks");
        let command = build_command(&script, &schema(&[]), &values(&[])).unwrap();
        assert_eq!(command.tokens(), &["sudo", "./flood.c"]);
    }

    #[test]
    fn test_build_is_deterministic_and_elevated_once() {
        let script = script("scan.py", "/opt/playbooks");
        let schema = schema(&["b", "a"]);
        let values = values(&[("a", "1"), ("b", "2")]);
        let first = build_command(&script, &schema, &values).unwrap();
        let second = build_command(&script, &schema, &values).unwrap();
        assert_eq!(first, second);
        // Pairs follow schema order, not map order.
        assert_eq!(first.args()[2..], ["-b", "2", "-a", "1"]);
        let elevated = first
            .tokens()
            .iter()
            .filter(|token| *token == ELEVATION_TOKEN)
            .count();
        assert_eq!(elevated, 1);
        assert_eq!(first.program(), ELEVATION_TOKEN);
    }

    #[test]
    fn test_build_keeps_values_verbatim() {
        let script = script("probe.sh", "/opt/playbooks");
        let command = build_command(
            &script,
            &schema(&["iface", "note"]),
            &values(&[("iface", ""), ("note", "a b; echo $HOME")]),
        )
        .unwrap();
        // No quoting and no dropped empties: the runner receives literal tokens.
        assert_eq!(
            command.args(),
            &["./probe.sh", "-iface", "", "-note", "a b; echo $HOME"]
        );
    }

    #[test]
    fn test_build_missing_value() {
        let script = script("probe.sh", "/opt/playbooks");
        let err = build_command(&script, &schema(&["iface"]), &values(&[])).unwrap_err();
        assert!(matches!(
            err,
            crate::error::LaunchError::MissingArgument { ref name } if name == "iface"
        ));
    }

    #[test]
    fn test_command_display_joins_tokens() {
        let command = CommandLine::new(vec![
            "sudo".to_string(),
            "./probe.sh".to_string(),
            "-iface".to_string(),
            "eth0".to_string(),
        ]);
        assert_eq!(command.to_string(), "sudo ./probe.sh -iface eth0");
    }
}
