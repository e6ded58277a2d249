use crate::domain::ArgumentSchema;
use crate::error::LaunchError;
use crate::ports::SchemaStore;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Loads `arguments.toml` fresh on every resolve so the operator can edit
/// argument definitions between runs without restarting. The document maps
/// quoted script file names to ordered arrays of argument names:
///
/// ```toml
/// "scan.py" = ["target", "ports"]
/// "probe.sh" = ["iface"]
/// ```
pub struct TomlSchemaStore {
    path: PathBuf,
}

impl TomlSchemaStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl SchemaStore for TomlSchemaStore {
    fn resolve(&self, script_name: &str) -> Result<Option<ArgumentSchema>, LaunchError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(LaunchError::SchemaCorrupt {
                    path: self.path.clone(),
                    message: err.to_string(),
                })
            }
        };

        let document: BTreeMap<String, Vec<String>> =
            toml::from_str(&contents).map_err(|err| LaunchError::SchemaCorrupt {
                path: self.path.clone(),
                message: err.to_string(),
            })?;

        match document.get(script_name) {
            Some(names) => {
                let schema = ArgumentSchema::new(names.clone()).map_err(|message| {
                    LaunchError::SchemaCorrupt {
                        path: self.path.clone(),
                        message: format!("{}: {}", script_name, message),
                    }
                })?;
                Ok(Some(schema))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_dir;
    use std::fs;

    fn store(dir: &std::path::Path, contents: &str) -> TomlSchemaStore {
        let path = dir.join("arguments.toml");
        fs::write(&path, contents).unwrap();
        TomlSchemaStore::new(path)
    }

    #[test]
    fn test_resolves_ordered_names() {
        let (_guard, dir) = test_dir("schema");
        let store = store(&dir, "\"scan.py\" = [\"target\", \"ports\"]\n");
        let schema = store.resolve("scan.py").unwrap().unwrap();
        assert_eq!(schema.names(), ["target", "ports"]);
    }

    #[test]
    fn test_missing_document_is_absent() {
        let (_guard, dir) = test_dir("schema-missing");
        let store = TomlSchemaStore::new(dir.join("arguments.toml"));
        assert!(store.resolve("scan.py").unwrap().is_none());
        assert!(store.resolve("probe.sh").unwrap().is_none());
    }

    #[test]
    fn test_missing_entry_is_absent() {
        let (_guard, dir) = test_dir("schema-entry");
        let store = store(&dir, "\"scan.py\" = [\"target\"]\n");
        assert!(store.resolve("probe.sh").unwrap().is_none());
    }

    #[test]
    fn test_empty_entry_is_a_valid_zero_argument_schema() {
        let (_guard, dir) = test_dir("schema-empty");
        let store = store(&dir, "\"wipe.sh\" = []\n");
        let schema = store.resolve("wipe.sh").unwrap().unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_malformed_document_is_corrupt() {
        let (_guard, dir) = test_dir("schema-corrupt");
        let store = store(&dir, "\"scan.py\" = [\"target\"");
        let err = store.resolve("scan.py").unwrap_err();
        assert!(matches!(err, LaunchError::SchemaCorrupt { .. }));
    }

    #[test]
    fn test_duplicate_names_are_corrupt() {
        let (_guard, dir) = test_dir("schema-dup");
        let store = store(&dir, "\"scan.py\" = [\"target\", \"target\"]\n");
        let err = store.resolve("scan.py").unwrap_err();
        assert!(matches!(err, LaunchError::SchemaCorrupt { .. }));
    }

    #[test]
    fn test_resolve_is_idempotent_and_reflects_edits() {
        let (_guard, dir) = test_dir("schema-edit");
        let path = dir.join("arguments.toml");
        fs::write(&path, "\"scan.py\" = [\"target\"]\n").unwrap();
        let store = TomlSchemaStore::new(path.clone());

        let first = store.resolve("scan.py").unwrap().unwrap();
        let second = store.resolve("scan.py").unwrap().unwrap();
        assert_eq!(first, second);

        fs::write(&path, "\"scan.py\" = [\"target\", \"ports\"]\n").unwrap();
        let edited = store.resolve("scan.py").unwrap().unwrap();
        assert_eq!(edited.names(), ["target", "ports"]);
    }
}
