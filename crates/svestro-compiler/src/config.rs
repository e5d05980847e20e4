//! Compiler configuration.

use std::path::PathBuf;

/// Configuration for the Svestro compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Path to the Sveltia CMS config file.
    pub config_path: PathBuf,

    /// Path of the Astro content config to write.
    pub out_path: PathBuf,

    /// Prefix prepended to every collection folder in the loader base.
    pub path_prefix: Option<String>,

    /// Config format ("yaml" or "json"). Inferred from the extension when `None`.
    pub format: Option<String>,

    /// Skip identifier and duplicate checks (for testing).
    pub skip_validation: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("./static/admin/config.yml"),
            out_path: PathBuf::from("./src/content/config.ts"),
            path_prefix: None,
            format: None,
            skip_validation: false,
        }
    }
}
