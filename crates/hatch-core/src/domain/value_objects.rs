//! Domain value objects: ProjectName and InterpreterVersion.
//!
//! Pure value types with equality-by-value and no identity. Each one
//! validates on construction, so holding one is proof the input was checked.

use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

// ── ProjectName ───────────────────────────────────────────────────────────────

/// A project name matching `^[A-Za-z0-9_-]+$`.
///
/// The name ends up in filesystem paths and subprocess arguments, so anything
/// outside this set (separators, dots, whitespace, shell metacharacters) is
/// rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DomainError::InvalidProjectName {
                name,
                reason: "name cannot be empty".into(),
            });
        }

        if let Some(bad) = name.chars().find(|c| !Self::is_allowed(*c)) {
            let reason = format!("character {bad:?} is not allowed");
            return Err(DomainError::InvalidProjectName { name, reason });
        }

        Ok(Self(name))
    }

    const fn is_allowed(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── InterpreterVersion ────────────────────────────────────────────────────────

/// `major.minor.patch` of the Python interpreter, ordered lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InterpreterVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl InterpreterVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extract the version from an interpreter banner such as
    /// `Python 3.12.1` or `Python 3.13.0rc2`.
    pub fn from_banner(banner: &str) -> Result<Self, DomainError> {
        banner
            .split_whitespace()
            .find_map(|word| word.parse().ok())
            .ok_or_else(|| DomainError::InvalidVersion(banner.trim().to_string()))
    }
}

impl FromStr for InterpreterVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidVersion(s.to_string());

        let mut parts = s.trim().splitn(3, '.');
        let major = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minor = match parts.next() {
            Some(p) => leading_number(p).ok_or_else(invalid)?,
            None => 0,
        };
        let patch = match parts.next() {
            Some(p) => leading_number(p).ok_or_else(invalid)?,
            None => 0,
        };

        Ok(Self::new(major, minor, patch))
    }
}

/// Parse the numeric prefix of a version component (`"0rc2"` -> `0`).
fn leading_number(part: &str) -> Option<u32> {
    let end = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());
    part[..end].parse().ok()
}

impl fmt::Display for InterpreterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_are_accepted() {
        for name in ["demo", "my-project", "my_app", "Project123", "a", "-_-"] {
            assert!(ProjectName::parse(name).is_ok(), "rejected {name}");
        }
    }

    #[test]
    fn names_outside_the_allowed_set_are_rejected() {
        for name in ["", "my app", "a/b", "a\\b", "..", ".hidden", "x;rm", "café", "a$b"] {
            assert!(
                matches!(
                    ProjectName::parse(name),
                    Err(DomainError::InvalidProjectName { .. })
                ),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn rejection_names_the_offending_character() {
        let err = ProjectName::parse("bad name").unwrap_err();
        assert!(err.to_string().contains("' '"));
    }

    #[test]
    fn version_parses_from_python_banner() {
        let v = InterpreterVersion::from_banner("Python 3.12.1\n").unwrap();
        assert_eq!(v, InterpreterVersion::new(3, 12, 1));
    }

    #[test]
    fn version_parses_prerelease_suffix() {
        let v = InterpreterVersion::from_banner("Python 3.13.0rc2").unwrap();
        assert_eq!(v, InterpreterVersion::new(3, 13, 0));
    }

    #[test]
    fn short_versions_default_missing_parts() {
        assert_eq!(
            "3.8".parse::<InterpreterVersion>().unwrap(),
            InterpreterVersion::new(3, 8, 0)
        );
        assert_eq!(
            "3".parse::<InterpreterVersion>().unwrap(),
            InterpreterVersion::new(3, 0, 0)
        );
    }

    #[test]
    fn garbage_banner_is_an_error() {
        assert!(matches!(
            InterpreterVersion::from_banner("command not found"),
            Err(DomainError::InvalidVersion(_))
        ));
    }

    #[test]
    fn versions_order_numerically() {
        let old: InterpreterVersion = "3.7.17".parse().unwrap();
        let min: InterpreterVersion = "3.8".parse().unwrap();
        let new: InterpreterVersion = "3.10.0".parse().unwrap();
        assert!(old < min);
        assert!(new > min);
    }
}
