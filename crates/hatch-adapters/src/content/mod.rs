//! Compiled-in payloads for every owned content file.
//!
//! Files live under `resources/` in this crate, mirrored by anchor:
//! `resources/project/...` lands in the project directory and
//! `resources/root/...` in the root folder.

use hatch_core::{
    application::ports::ContentStore,
    domain::{Anchor, RelativePath},
};

macro_rules! resource {
    (Project, $path:literal) => {
        (
            Anchor::Project,
            $path,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/project/", $path)),
        )
    };
    (Root, $path:literal) => {
        (
            Anchor::Root,
            $path,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/root/", $path)),
        )
    };
}

const RESOURCES: &[(Anchor, &str, &str)] = &[
    resource!(Project, "main.py"),
    resource!(Project, ".gitignore"),
    resource!(Project, "frontend/public/imgs/favicon.svg"),
    resource!(Project, "frontend/public/js/darkmode.js"),
    resource!(Project, "frontend/public/css/input.css"),
    resource!(Project, "frontend/templates/_base.html"),
    resource!(Project, "frontend/templates/index.html"),
    resource!(Project, "frontend/templates/components/navbar.html"),
    resource!(Project, "frontend/templates/components/footer.html"),
    resource!(Project, "frontend/templates/auth/form_login.html"),
    resource!(Project, "frontend/templates/auth/form_signup.html"),
    resource!(Project, "frontend/templates/auth/form_resetpassword.html"),
    resource!(Project, "frontend/templates/pages/github.html"),
    resource!(Project, "frontend/templates/pages/page1.html"),
    resource!(Project, "frontend/templates/pages/page2.html"),
    resource!(Root, ".prettierrc"),
    resource!(Root, ".vscode/settings.json"),
];

/// [`ContentStore`] backed by files embedded at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedContentStore;

impl EmbeddedContentStore {
    pub fn new() -> Self {
        Self
    }

    /// Number of embedded payloads.
    pub fn len(&self) -> usize {
        RESOURCES.len()
    }

    pub fn is_empty(&self) -> bool {
        RESOURCES.is_empty()
    }
}

impl ContentStore for EmbeddedContentStore {
    fn content(&self, anchor: Anchor, path: &RelativePath) -> Option<&str> {
        let wanted = path.to_slash_string();
        RESOURCES
            .iter()
            .find(|(a, p, _)| *a == anchor && *p == wanted)
            .map(|(_, _, body)| *body)
    }
}
