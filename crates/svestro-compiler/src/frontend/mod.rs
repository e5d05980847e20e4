//! Config frontends for reading a Sveltia config document.
//!
//! Each frontend is responsible for turning source text in its format into the
//! untyped document tree consumed by [`to_ir`](crate::to_ir). Sveltia accepts
//! both YAML and JSON configs, so both share the same tree type.

mod json;
mod yaml;

pub use json::JsonFrontend;
pub use yaml::YamlFrontend;

use std::path::Path;
use serde_json::Value;
use crate::diagnostic::CompilerError;

/// Trait for config frontends.
pub trait Frontend {
    /// Returns the format name (e.g., "yaml", "json").
    fn format(&self) -> &str;

    /// Returns file extensions this frontend handles (e.g., ["yml", "yaml"]).
    fn extensions(&self) -> &[&str];

    /// Parses source text into an untyped document. `path` is used for errors only.
    fn parse_document(&self, source: &str, path: &Path) -> Result<Value, CompilerError>;
}

/// Creates a frontend for the given format name.
pub fn create_frontend(format: &str) -> Result<Box<dyn Frontend>, CompilerError> {
    match format.to_ascii_lowercase().as_str() {
        "yaml" | "yml" => Ok(Box::new(YamlFrontend)),
        "json" => Ok(Box::new(JsonFrontend)),
        _ => Err(CompilerError::UnsupportedFormat {
            format: format.to_string(),
        }),
    }
}

/// Picks a frontend from the file extension, defaulting to YAML.
pub fn frontend_for_path(path: &Path) -> Box<dyn Frontend> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| JsonFrontend.extensions().contains(&ext.to_ascii_lowercase().as_str()));

    if is_json {
        Box::new(JsonFrontend)
    } else {
        Box::new(YamlFrontend)
    }
}
