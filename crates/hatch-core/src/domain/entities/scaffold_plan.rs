use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{
        common::{Anchor, RelativePath},
        project_spec::ProjectSpec,
    },
    error::DomainError,
    layout::{EntryKind, LAYOUT, LayoutEntry},
};

/// Ordered list of paths to materialise for one project.
///
/// Derived deterministically from a [`ProjectSpec`]; never persisted.
/// It contains no I/O, only data.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<PlanEntry>,
}

/// One `(target_path, kind)` pair, remembering how it was anchored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub anchor: Anchor,
    pub relative: RelativePath,
    pub target: PathBuf,
    pub kind: EntryKind,
}

impl ScaffoldPlan {
    /// Plan for the built-in layout.
    pub fn for_project(spec: &ProjectSpec) -> Result<Self, DomainError> {
        Self::from_layout(spec, LAYOUT)
    }

    pub fn from_layout(spec: &ProjectSpec, layout: &[LayoutEntry]) -> Result<Self, DomainError> {
        let entries = layout
            .iter()
            .map(|entry| {
                let relative = RelativePath::try_new(entry.path)?;
                Ok(PlanEntry {
                    anchor: entry.anchor,
                    target: spec.resolve(entry.anchor, &relative),
                    relative,
                    kind: entry.kind,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        let plan = Self {
            root: spec.root().to_path_buf(),
            entries,
        };
        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(&entry.target) {
                return Err(DomainError::DuplicatePath {
                    path: entry.target.display().to_string(),
                });
            }

            if !entry.target.starts_with(&self.root) {
                return Err(DomainError::PathOutsideRoot {
                    path: entry.target.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn directories(&self) -> impl Iterator<Item = &PlanEntry> {
        self.of_kind(EntryKind::Directory)
    }

    pub fn empty_files(&self) -> impl Iterator<Item = &PlanEntry> {
        self.of_kind(EntryKind::EmptyFile)
    }

    pub fn content_files(&self) -> impl Iterator<Item = &PlanEntry> {
        self.of_kind(EntryKind::ContentFile)
    }

    fn of_kind(&self, kind: EntryKind) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ProjectName;

    fn spec(name: &str) -> ProjectSpec {
        ProjectSpec::new("/work", ProjectName::parse(name).unwrap())
    }

    #[test]
    fn plan_is_deterministic() {
        let a = ScaffoldPlan::for_project(&spec("demo")).unwrap();
        let b = ScaffoldPlan::for_project(&spec("demo")).unwrap();
        assert_eq!(a.entries(), b.entries());
    }

    #[test]
    fn plan_covers_the_whole_layout() {
        let plan = ScaffoldPlan::for_project(&spec("demo")).unwrap();
        assert_eq!(plan.entry_count(), LAYOUT.len());
        assert_eq!(plan.directories().count(), 9);
        assert!(plan.empty_files().count() > 0);
        assert!(plan.content_files().count() > 0);
    }

    #[test]
    fn project_entries_live_under_project_dir() {
        let spec = spec("demo");
        let plan = ScaffoldPlan::for_project(&spec).unwrap();
        let base = plan
            .content_files()
            .find(|e| e.relative.to_string() == "frontend/templates/_base.html")
            .unwrap();
        assert!(base.target.starts_with(spec.project_dir()));
    }

    #[test]
    fn root_entries_live_beside_project() {
        let spec = spec("demo");
        let plan = ScaffoldPlan::for_project(&spec).unwrap();
        let vscode = plan.directories().find(|e| e.anchor == Anchor::Root).unwrap();
        assert_eq!(vscode.target, spec.root().join(".vscode"));
    }

    #[test]
    fn duplicate_targets_are_rejected() {
        let layout = [
            LayoutEntry {
                anchor: Anchor::Project,
                path: "tests",
                kind: EntryKind::Directory,
            },
            LayoutEntry {
                anchor: Anchor::Root,
                path: "demo/tests",
                kind: EntryKind::Directory,
            },
        ];
        assert!(matches!(
            ScaffoldPlan::from_layout(&spec("demo"), &layout),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn escaping_paths_are_rejected() {
        let layout = [LayoutEntry {
            anchor: Anchor::Project,
            path: "../../etc",
            kind: EntryKind::Directory,
        }];
        assert!(matches!(
            ScaffoldPlan::from_layout(&spec("demo"), &layout),
            Err(DomainError::PathOutsideRoot { .. })
        ));
    }
}
