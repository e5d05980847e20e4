//! YAML config frontend (`config.yml`, the Sveltia default).

use std::path::Path;
use serde_json::Value;

use super::Frontend;
use crate::diagnostic::CompilerError;

/// Parses YAML configs.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlFrontend;

impl Frontend for YamlFrontend {
    fn format(&self) -> &str {
        "yaml"
    }

    fn extensions(&self) -> &[&str] {
        &["yml", "yaml"]
    }

    fn parse_document(&self, source: &str, path: &Path) -> Result<Value, CompilerError> {
        // Deserialize straight into a JSON tree: configs only use string keys.
        serde_yaml::from_str::<Value>(source).map_err(|e| CompilerError::ParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
