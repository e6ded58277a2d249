use crate::domain::{build_command, ArgumentSchema, ArgumentValues, CommandLine, Script};
use crate::error::LaunchError;
use crate::ports::{ArgumentCollector, Collection, ProcessRunner, RunOutput, SchemaStore, ScriptRegistry};

/// One run flow, end to end. Either the operator cancelled at the form, or
/// a process was spawned and waited for.
#[derive(Debug)]
pub enum LaunchOutcome {
    Cancelled,
    Completed {
        command: CommandLine,
        output: RunOutput,
    },
}

pub struct LaunchService {
    registry: Box<dyn ScriptRegistry>,
    schemas: Box<dyn SchemaStore>,
    runner: Box<dyn ProcessRunner>,
}

impl LaunchService {
    pub fn new(
        registry: Box<dyn ScriptRegistry>,
        schemas: Box<dyn SchemaStore>,
        runner: Box<dyn ProcessRunner>,
    ) -> Self {
        Self {
            registry,
            schemas,
            runner,
        }
    }

    pub fn list_scripts(&self) -> Result<Vec<Script>, LaunchError> {
        self.registry.list()
    }

    /// Re-reads the argument document and returns the schema for `script`,
    /// or `SchemaAbsent` when the document or the entry is missing.
    pub fn resolve_schema(&self, script: &Script) -> Result<ArgumentSchema, LaunchError> {
        match self.schemas.resolve(&script.name)? {
            Some(schema) => Ok(schema),
            None => Err(LaunchError::SchemaAbsent {
                script: script.name.clone(),
            }),
        }
    }

    /// Builds the command from already-collected values and runs it. Used
    /// by presentation layers that drive their own collection step.
    pub fn execute(
        &self,
        script: &Script,
        schema: &ArgumentSchema,
        values: &ArgumentValues,
    ) -> Result<(CommandLine, RunOutput), LaunchError> {
        let command = build_command(script, schema, values)?;
        let output = self.runner.run(&command)?;
        Ok((command, output))
    }

    /// Full run flow with a synchronous collector: resolve, collect, build,
    /// run. Cancellation aborts before any command exists.
    pub fn launch(
        &self,
        script: &Script,
        collector: &mut dyn ArgumentCollector,
    ) -> Result<LaunchOutcome, LaunchError> {
        let schema = self.resolve_schema(script)?;
        let values = match collector.collect(&schema)? {
            Collection::Values(values) => values,
            Collection::Cancelled => return Ok(LaunchOutcome::Cancelled),
        };
        let (command, output) = self.execute(script, &schema, &values)?;
        Ok(LaunchOutcome::Completed { command, output })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::rc::Rc;

    struct FixedRegistry(Vec<Script>);

    impl ScriptRegistry for FixedRegistry {
        fn list(&self) -> Result<Vec<Script>, LaunchError> {
            Ok(self.0.clone())
        }
    }

    struct FixedSchemas(HashMap<String, Vec<String>>);

    impl SchemaStore for FixedSchemas {
        fn resolve(&self, script_name: &str) -> Result<Option<ArgumentSchema>, LaunchError> {
            match self.0.get(script_name) {
                Some(names) => Ok(Some(ArgumentSchema::new(names.clone()).unwrap())),
                None => Ok(None),
            }
        }
    }

    struct CountingRunner {
        calls: Rc<Cell<usize>>,
        exit_code: i32,
        stderr: &'static str,
    }

    impl ProcessRunner for CountingRunner {
        fn run(&self, _command: &CommandLine) -> Result<RunOutput, LaunchError> {
            self.calls.set(self.calls.get() + 1);
            Ok(RunOutput {
                stdout: "done".to_string(),
                stderr: self.stderr.to_string(),
                exit_code: Some(self.exit_code),
                success: self.exit_code == 0,
            })
        }
    }

    struct CannedCollector {
        outcome: Collection,
        calls: usize,
    }

    impl ArgumentCollector for CannedCollector {
        fn collect(&mut self, _schema: &ArgumentSchema) -> Result<Collection, LaunchError> {
            self.calls += 1;
            Ok(self.outcome.clone())
        }
    }

    fn script(name: &str) -> Script {
        Script::from_path(PathBuf::from("/opt/playbooks").join(name)).unwrap()
    }

    fn service(
        schemas: HashMap<String, Vec<String>>,
        exit_code: i32,
        stderr: &'static str,
    ) -> (LaunchService, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let service = LaunchService::new(
            Box::new(FixedRegistry(vec![script("scan.py")])),
            Box::new(FixedSchemas(schemas)),
            Box::new(CountingRunner {
                calls: Rc::clone(&calls),
                exit_code,
                stderr,
            }),
        );
        (service, calls)
    }

    fn schemas(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(name, args)| {
                (
                    name.to_string(),
                    args.iter().map(|arg| arg.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_launch_runs_collected_command() {
        let (service, calls) = service(schemas(&[("probe.sh", &["iface"])]), 0, "");
        let mut collector = CannedCollector {
            outcome: Collection::Values(
                [("iface".to_string(), "eth0".to_string())].into_iter().collect(),
            ),
            calls: 0,
        };
        let outcome = service.launch(&script("probe.sh"), &mut collector).unwrap();
        match outcome {
            LaunchOutcome::Completed { command, output } => {
                assert_eq!(command.tokens(), &["sudo", "./probe.sh", "-iface", "eth0"]);
                assert!(output.success);
            }
            LaunchOutcome::Cancelled => panic!("expected a completed run"),
        }
        assert_eq!(calls.get(), 1);
        assert_eq!(collector.calls, 1);
    }

    #[test]
    fn test_cancel_spawns_nothing() {
        let (service, calls) = service(schemas(&[("probe.sh", &["iface"])]), 0, "");
        let mut collector = CannedCollector {
            outcome: Collection::Cancelled,
            calls: 0,
        };
        let outcome = service.launch(&script("probe.sh"), &mut collector).unwrap();
        assert!(matches!(outcome, LaunchOutcome::Cancelled));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_absent_schema_aborts_before_collection() {
        let (service, calls) = service(schemas(&[]), 0, "");
        let mut collector = CannedCollector {
            outcome: Collection::Values(HashMap::new()),
            calls: 0,
        };
        let err = service.launch(&script("scan.py"), &mut collector).unwrap_err();
        assert!(matches!(
            err,
            LaunchError::SchemaAbsent { ref script } if script == "scan.py"
        ));
        assert_eq!(collector.calls, 0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_nonzero_exit_is_a_completed_failure() {
        let (service, calls) = service(
            schemas(&[("scan.py", &[])]),
            2,
            "permission denied",
        );
        let mut collector = CannedCollector {
            outcome: Collection::Values(HashMap::new()),
            calls: 0,
        };
        let outcome = service.launch(&script("scan.py"), &mut collector).unwrap();
        match outcome {
            LaunchOutcome::Completed { output, .. } => {
                assert!(!output.success);
                assert_eq!(output.exit_code, Some(2));
                assert_eq!(
                    output.into_result(),
                    crate::domain::ExecutionResult::Failure("permission denied".to_string())
                );
            }
            LaunchOutcome::Cancelled => panic!("expected a completed run"),
        }
        assert_eq!(calls.get(), 1);
    }
}
