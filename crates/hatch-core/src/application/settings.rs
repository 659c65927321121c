//! Tunables consumed by the provisioning stages.
//!
//! The CLI builds these from its configuration; the core never reads config
//! files or environment variables itself.

use crate::domain::{InterpreterVersion, Platform};

/// Everything the five stages need beyond the [`ProjectSpec`](crate::domain::ProjectSpec).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionSettings {
    /// Python interpreter used for the version check and `-m venv`.
    pub interpreter: String,
    pub minimum_interpreter: InterpreterVersion,
    /// Environment directory name, relative to the root.
    pub environment_dir: String,
    /// Lines of `requirements.txt`.
    pub requirements: Vec<String>,
    /// JS package manager looked up on `PATH`.
    pub package_manager: String,
    pub ui_package: String,
    /// Files copied out of the UI package's `dist` directory.
    pub dist_files: Vec<String>,
    /// Value of `scripts.dev` in the package manifest.
    pub dev_script: String,
    pub htmx_url: String,
    /// Release download prefix; the platform artifact name is appended.
    pub tailwind_release_url: String,
    pub platform: Platform,
}

pub const DEFAULT_DEV_SCRIPT: &str = "npx @tailwindcss/cli -i ./frontend/public/css/input.css -o ./frontend/public/css/output.css --watch";

impl Default for ProvisionSettings {
    fn default() -> Self {
        Self {
            interpreter: if cfg!(windows) { "python" } else { "python3" }.into(),
            minimum_interpreter: InterpreterVersion::new(3, 8, 0),
            environment_dir: "venv".into(),
            requirements: [
                "fastapi[standard]",
                "uvicorn[standard]",
                "sqlalchemy",
                "jinja2",
                "python-dotenv",
                "supabase",
            ]
            .map(String::from)
            .to_vec(),
            package_manager: "npm".into(),
            ui_package: "flowbite".into(),
            dist_files: vec!["flowbite.min.js".into(), "flowbite.min.js.map".into()],
            dev_script: DEFAULT_DEV_SCRIPT.into(),
            htmx_url: "https://cdn.jsdelivr.net/npm/htmx.org@2.0.6/dist/htmx.min.js".into(),
            tailwind_release_url:
                "https://github.com/tailwindlabs/tailwindcss/releases/download/v4.1.12".into(),
            platform: Platform::host(),
        }
    }
}
