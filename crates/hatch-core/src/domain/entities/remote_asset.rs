use std::fmt;

use crate::domain::entities::common::RelativePath;

/// A remote byte payload and where it lands inside the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAsset {
    pub label: String,
    pub url: String,
    pub destination: RelativePath,
    /// Mark the written file executable (Unix only).
    pub executable: bool,
}

impl fmt::Display for RemoteAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.url)
    }
}

/// Host operating system and CPU architecture, as `std::env::consts` names them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    pub fn host() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Release artifact name of the standalone Tailwind CSS CLI.
    pub fn tailwind_artifact(&self) -> Option<&'static str> {
        match (self.os.as_str(), self.arch.as_str()) {
            ("linux", "x86_64") => Some("tailwindcss-linux-x64"),
            ("linux", "aarch64") => Some("tailwindcss-linux-arm64"),
            ("macos", "x86_64") => Some("tailwindcss-macos-x64"),
            ("macos", "aarch64") => Some("tailwindcss-macos-arm64"),
            ("windows", "x86_64") => Some("tailwindcss-windows-x64.exe"),
            _ => None,
        }
    }

    /// Local file name for the Tailwind CLI.
    pub fn tailwind_binary_name(&self) -> &'static str {
        if self.os == "windows" {
            "tailwindcss.exe"
        } else {
            "tailwindcss"
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_platforms_map_to_release_artifacts() {
        assert_eq!(
            Platform::new("linux", "x86_64").tailwind_artifact(),
            Some("tailwindcss-linux-x64")
        );
        assert_eq!(
            Platform::new("macos", "aarch64").tailwind_artifact(),
            Some("tailwindcss-macos-arm64")
        );
        assert_eq!(
            Platform::new("windows", "x86_64").tailwind_artifact(),
            Some("tailwindcss-windows-x64.exe")
        );
    }

    #[test]
    fn unknown_platform_has_no_artifact() {
        assert_eq!(Platform::new("freebsd", "x86_64").tailwind_artifact(), None);
    }

    #[test]
    fn windows_binary_keeps_exe_suffix() {
        assert_eq!(
            Platform::new("windows", "x86_64").tailwind_binary_name(),
            "tailwindcss.exe"
        );
        assert_eq!(
            Platform::new("linux", "x86_64").tailwind_binary_name(),
            "tailwindcss"
        );
    }
}
