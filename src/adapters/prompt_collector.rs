use crate::domain::{ArgumentSchema, ArgumentValues};
use crate::error::LaunchError;
use crate::ports::{ArgumentCollector, Collection};
use std::io::{self, BufRead, BufReader, Stdin, Stderr, Write};

/// Collector for headless runs: values preset on the command line are taken
/// as-is, the remaining schema names are prompted one per line. EOF on the
/// input cancels the whole run.
pub struct PromptCollector<R, W> {
    presets: ArgumentValues,
    reader: R,
    writer: W,
}

impl PromptCollector<BufReader<Stdin>, Stderr> {
    pub fn stdio(presets: ArgumentValues) -> Self {
        Self::new(presets, BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R, W> PromptCollector<R, W> {
    pub fn new(presets: ArgumentValues, reader: R, writer: W) -> Self {
        Self {
            presets,
            reader,
            writer,
        }
    }
}

impl<R: BufRead, W: Write> ArgumentCollector for PromptCollector<R, W> {
    fn collect(&mut self, schema: &ArgumentSchema) -> Result<Collection, LaunchError> {
        let mut values = ArgumentValues::new();
        for name in schema.names() {
            if let Some(value) = self.presets.get(name) {
                values.insert(name.clone(), value.clone());
                continue;
            }

            write!(self.writer, "{}: ", name)?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(Collection::Cancelled);
            }
            // Strip the line terminator only; the value itself stays verbatim.
            if line.ends_with('\n') {
                line.pop();
                if line.ends_with('\r') {
                    line.pop();
                }
            }
            values.insert(name.clone(), line);
        }
        Ok(Collection::Values(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn schema(names: &[&str]) -> ArgumentSchema {
        ArgumentSchema::new(names.iter().map(|name| name.to_string()).collect()).unwrap()
    }

    fn presets(pairs: &[(&str, &str)]) -> ArgumentValues {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_prompts_in_schema_order() {
        let mut collector =
            PromptCollector::new(presets(&[]), Cursor::new("10.0.0.5\n22,80\n"), Vec::new());
        let outcome = collector.collect(&schema(&["target", "ports"])).unwrap();
        match outcome {
            Collection::Values(values) => {
                assert_eq!(values["target"], "10.0.0.5");
                assert_eq!(values["ports"], "22,80");
            }
            Collection::Cancelled => panic!("expected values"),
        }
        let prompts = String::from_utf8(collector.writer).unwrap();
        assert_eq!(prompts, "target: ports: ");
    }

    #[test]
    fn test_presets_skip_their_prompts() {
        let mut collector = PromptCollector::new(
            presets(&[("target", "10.0.0.5")]),
            Cursor::new("eth0\n"),
            Vec::new(),
        );
        let outcome = collector.collect(&schema(&["target", "iface"])).unwrap();
        match outcome {
            Collection::Values(values) => {
                assert_eq!(values["target"], "10.0.0.5");
                assert_eq!(values["iface"], "eth0");
            }
            Collection::Cancelled => panic!("expected values"),
        }
        let prompts = String::from_utf8(collector.writer).unwrap();
        assert_eq!(prompts, "iface: ");
    }

    #[test]
    fn test_empty_line_is_a_valid_value() {
        let mut collector = PromptCollector::new(presets(&[]), Cursor::new("\n"), Vec::new());
        match collector.collect(&schema(&["note"])).unwrap() {
            Collection::Values(values) => assert_eq!(values["note"], ""),
            Collection::Cancelled => panic!("expected values"),
        }
    }

    #[test]
    fn test_eof_cancels() {
        let mut collector =
            PromptCollector::new(presets(&[]), Cursor::new("10.0.0.5\n"), Vec::new());
        let outcome = collector.collect(&schema(&["target", "ports"])).unwrap();
        assert_eq!(outcome, Collection::Cancelled);
    }
}
