use crate::domain::Script;
use crate::error::LaunchError;
use crate::ports::ScriptRegistry;
use std::fs;
use std::path::PathBuf;

/// Scans a flat playbook directory on every call. Only files whose
/// extension is on the allow-list become scripts; everything else,
/// including subdirectories and the argument document itself, is skipped.
pub struct FsScriptRegistry {
    dir: PathBuf,
}

impl FsScriptRegistry {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl ScriptRegistry for FsScriptRegistry {
    fn list(&self) -> Result<Vec<Script>, LaunchError> {
        let entries = fs::read_dir(&self.dir).map_err(|source| LaunchError::DirectoryUnavailable {
            path: self.dir.clone(),
            source,
        })?;

        let mut scripts = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| LaunchError::DirectoryUnavailable {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(script) = Script::from_path(path) {
                scripts.push(script);
            }
        }

        scripts.sort_by(|a, b| a.name.to_ascii_lowercase().cmp(&b.name.to_ascii_lowercase()));
        Ok(scripts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScriptKind;
    use crate::util::test_dir;
    use std::fs;

    #[test]
    fn test_lists_only_allow_listed_extensions() {
        let (_guard, dir) = test_dir("registry");
        for name in ["scan.py", "probe.sh", "flood.c", "readme.md", "arguments.toml", "notes"] {
            fs::write(dir.join(name), "").unwrap();
        }
        fs::create_dir(dir.join("archive.sh.d")).unwrap();

        let scripts = FsScriptRegistry::new(&dir).list().unwrap();
        let names: Vec<&str> = scripts.iter().map(|script| script.name.as_str()).collect();
        assert_eq!(names, ["flood.c", "probe.sh", "scan.py"]);
        assert_eq!(scripts[0].kind, ScriptKind::Native);
        assert_eq!(scripts[1].kind, ScriptKind::Shell);
        assert_eq!(scripts[2].kind, ScriptKind::Python);
        assert_eq!(scripts[2].path, dir.join("scan.py"));
    }

    #[test]
    fn test_missing_directory_is_unavailable() {
        let (_guard, dir) = test_dir("registry-missing");
        let err = FsScriptRegistry::new(dir.join("nope")).list().unwrap_err();
        assert!(matches!(err, LaunchError::DirectoryUnavailable { .. }));
    }

    #[test]
    fn test_rescan_sees_new_scripts() {
        let (_guard, dir) = test_dir("registry-rescan");
        let registry = FsScriptRegistry::new(&dir);
        assert!(registry.list().unwrap().is_empty());

        fs::write(dir.join("late.sh"), "").unwrap();
        let names: Vec<String> = registry
            .list()
            .unwrap()
            .into_iter()
            .map(|script| script.name)
            .collect();
        assert_eq!(names, ["late.sh"]);
    }
}
