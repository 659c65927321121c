use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::common::{Anchor, RelativePath},
    value_objects::ProjectName,
};

/// What the user asked for: a root folder and a project name.
///
/// Built once by the preflight stage after both inputs are validated, then
/// threaded by reference through every later stage. Every path the tool
/// touches is derived from it; nothing depends on the process working
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    root_path: PathBuf,
    project_name: ProjectName,
}

impl ProjectSpec {
    pub fn new(root_path: impl Into<PathBuf>, project_name: ProjectName) -> Self {
        Self {
            root_path: root_path.into(),
            project_name,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }

    pub fn name(&self) -> &ProjectName {
        &self.project_name
    }

    /// `<root>/<name>`.
    pub fn project_dir(&self) -> PathBuf {
        self.root_path.join(self.project_name.as_str())
    }

    /// Directory an [`Anchor`] refers to.
    pub fn anchor_dir(&self, anchor: Anchor) -> PathBuf {
        match anchor {
            Anchor::Root => self.root_path.clone(),
            Anchor::Project => self.project_dir(),
        }
    }

    /// Absolute location of an anchored relative path.
    pub fn resolve(&self, anchor: Anchor, path: &RelativePath) -> PathBuf {
        self.anchor_dir(anchor).join(path.as_path())
    }

    /// Isolated Python environment, `<root>/<dir_name>`.
    pub fn environment_dir(&self, dir_name: &str) -> PathBuf {
        self.root_path.join(dir_name)
    }
}

impl fmt::Display for ProjectSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.project_dir().display())
    }
}

/// The environment's `pip`, which lives under a platform-specific directory.
pub fn pip_executable(environment_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        environment_dir.join("Scripts").join("pip.exe")
    } else {
        environment_dir.join("bin").join("pip")
    }
}
