use std::path::{Path, PathBuf};

/// Resolved paths of a playbook directory. Nothing is created implicitly;
/// a missing root is a startup error and the history directory appears on
/// first record.
pub struct Playbooks {
    root: PathBuf,
    arguments_path: PathBuf,
    history_dir: PathBuf,
    banner_path: PathBuf,
}

impl Playbooks {
    pub fn new(root: PathBuf) -> Self {
        let arguments_path = root.join("arguments.toml");
        let history_dir = root.join(".history");
        let banner_path = root.join("banner.txt");
        Self {
            root,
            arguments_path,
            history_dir,
            banner_path,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn arguments_path(&self) -> &Path {
        &self.arguments_path
    }

    pub fn history_dir(&self) -> &Path {
        &self.history_dir
    }

    pub fn banner_path(&self) -> &Path {
        &self.banner_path
    }
}
