//! The fixed project layout.
//!
//! One table describes every path the tool creates or owns. The scaffold
//! plan is derived from it, the content store is keyed by it, and the asset
//! stage takes its destinations from the constants below.

use crate::domain::entities::common::Anchor;

/// What the scaffolder or content writer does with a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Created (with parents) if missing.
    Directory,
    /// Created empty if missing; never truncated.
    EmptyFile,
    /// Overwritten unconditionally by the content writer.
    ContentFile,
}

impl EntryKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::EmptyFile => "empty_file",
            Self::ContentFile => "content_file",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEntry {
    pub anchor: Anchor,
    pub path: &'static str,
    pub kind: EntryKind,
}

const fn dir(anchor: Anchor, path: &'static str) -> LayoutEntry {
    LayoutEntry {
        anchor,
        path,
        kind: EntryKind::Directory,
    }
}

const fn empty(path: &'static str) -> LayoutEntry {
    LayoutEntry {
        anchor: Anchor::Project,
        path,
        kind: EntryKind::EmptyFile,
    }
}

const fn content(anchor: Anchor, path: &'static str) -> LayoutEntry {
    LayoutEntry {
        anchor,
        path,
        kind: EntryKind::ContentFile,
    }
}

use Anchor::{Project, Root};

/// Every directory, placeholder and owned file, parents before children.
pub const LAYOUT: &[LayoutEntry] = &[
    // directories
    dir(Root, ".vscode"),
    dir(Project, "backend/database"),
    dir(Project, "frontend/public/css"),
    dir(Project, "frontend/public/imgs"),
    dir(Project, "frontend/public/js"),
    dir(Project, "frontend/templates/components"),
    dir(Project, "frontend/templates/auth"),
    dir(Project, "frontend/templates/pages"),
    dir(Project, "tests"),
    // placeholders
    empty("backend/database/__init__.py"),
    empty("backend/database/crud.py"),
    empty("backend/database/models.py"),
    empty("backend/database/schemas.py"),
    empty("frontend/public/css/output.css"),
    empty("frontend/public/js/alpine.min.js"),
    empty("frontend/public/js/htmx.min.js"),
    empty("tests/__init__.py"),
    empty(".env"),
    // owned content
    content(Project, "main.py"),
    content(Project, ".gitignore"),
    content(Project, "frontend/public/imgs/favicon.svg"),
    content(Project, "frontend/public/js/darkmode.js"),
    content(Project, "frontend/public/css/input.css"),
    content(Project, "frontend/templates/_base.html"),
    content(Project, "frontend/templates/index.html"),
    content(Project, "frontend/templates/components/navbar.html"),
    content(Project, "frontend/templates/components/footer.html"),
    content(Project, "frontend/templates/auth/form_login.html"),
    content(Project, "frontend/templates/auth/form_signup.html"),
    content(Project, "frontend/templates/auth/form_resetpassword.html"),
    content(Project, "frontend/templates/pages/github.html"),
    content(Project, "frontend/templates/pages/page1.html"),
    content(Project, "frontend/templates/pages/page2.html"),
    content(Root, ".prettierrc"),
    content(Root, ".vscode/settings.json"),
];

/// Dependency manifest handed to pip, relative to the root.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// JS package manifest produced by the package manager, relative to the project.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Where copied UI-package files and downloaded scripts land, relative to the project.
pub const PUBLIC_JS_DIR: &str = "frontend/public/js";

/// Install output of a JS package, relative to the project.
pub fn package_dist_dir(package: &str) -> String {
    format!("node_modules/{package}/dist")
}
