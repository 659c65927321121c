//! JS package manifest patching.
//!
//! The patch is a pure merge: parse, ensure `scripts` is an object, set one
//! key, serialise back. Unrelated keys keep their values and their order.

use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// Set `scripts.<name> = <command>` in a manifest, returning the new text.
///
/// The output uses two-space indentation and ends with a newline.
pub fn set_script(manifest: &str, name: &str, command: &str) -> Result<String, DomainError> {
    let mut document: Value =
        serde_json::from_str(manifest).map_err(|e| DomainError::InvalidManifest(e.to_string()))?;

    let root = document
        .as_object_mut()
        .ok_or_else(|| DomainError::InvalidManifest("top level is not an object".into()))?;

    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| DomainError::InvalidManifest("'scripts' is not an object".into()))?;

    scripts.insert(name.to_string(), Value::String(command.to_string()));

    let mut out = serde_json::to_string_pretty(&document)
        .map_err(|e| DomainError::InvalidManifest(e.to_string()))?;
    out.push('\n');
    Ok(out)
}
