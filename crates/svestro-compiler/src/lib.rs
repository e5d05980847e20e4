//! # Svestro Compiler
//!
//! This crate turns a Sveltia CMS configuration into an Astro content config:
//! one `defineCollection` per collection (and locale) with a Zod schema built
//! from the collection's field widgets.
//!
//! ## Architecture
//!
//! ```text
//! config.yml / config.json
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Frontend   │  Format-specific parsing
//! │ (text → doc) │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    to_ir     │  Widget factory + collection assembly
//! │  (doc → IR)  │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Validate   │  Identifier & duplicate checks
//! │     (IR)     │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Codegen    │  Zod schemas + defineCollection
//! │  (IR → TS)   │
//! └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use svestro_compiler::{Compiler, CompilerConfig};
//!
//! let config = CompilerConfig {
//!     config_path: "static/admin/config.yml".into(),
//!     out_path: "src/content/config.ts".into(),
//!     path_prefix: None,
//!     format: None,
//!     skip_validation: false,
//! };
//!
//! let result = Compiler::new(config).compile()?;
//! println!("{} collections", result.collections);
//! ```

pub mod config;
pub mod frontend;
pub mod ir;
pub mod to_ir;
pub mod validate;
pub mod codegen;
pub mod diagnostic;

use std::path::PathBuf;

pub use config::CompilerConfig;
pub use diagnostic::CompilerError;
pub use codegen::GeneratedCode;

/// The main compiler struct that orchestrates the compilation pipeline.
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    /// Creates a new compiler with the given configuration.
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compiles the Sveltia config into an Astro content config file.
    ///
    /// This runs the full pipeline:
    /// 1. Read the config file
    /// 2. Parse it with the frontend for its format
    /// 3. Convert the document to IR
    /// 4. Validate the IR
    /// 5. Generate TypeScript
    /// 6. Write the output file
    ///
    /// The output file is only touched once generation has succeeded.
    pub fn compile(&self) -> Result<CompileResult, CompilerError> {
        let (ir, generated) = self.run()?;
        self.write_output(&generated)?;
        Ok(self.result(&ir, generated))
    }

    /// Validates the Sveltia config without writing anything.
    pub fn check(&self) -> Result<CompileResult, CompilerError> {
        let ir = self.load_ir()?;
        self.validate(&ir)?;
        let generated = codegen::generate(&ir);
        Ok(self.result(&ir, generated))
    }

    /// Generates the content config text without writing it.
    pub fn generate(&self) -> Result<GeneratedCode, CompilerError> {
        self.run().map(|(_, generated)| generated)
    }

    /// Reads and converts the config file to IR.
    pub fn load_ir(&self) -> Result<ir::ContentConfigIR, CompilerError> {
        let path = &self.config.config_path;

        // Phase 1: Read source
        let source =
            std::fs::read_to_string(path).map_err(|e| CompilerError::io(path, e.to_string()))?;

        // Phase 2: Parse document
        let frontend = match &self.config.format {
            Some(format) => frontend::create_frontend(format)?,
            None => frontend::frontend_for_path(path),
        };
        let document = frontend.parse_document(&source, path)?;

        // Phase 3: Convert to IR
        to_ir::to_ir(&document, self.config.path_prefix.as_deref())
    }

    fn run(&self) -> Result<(ir::ContentConfigIR, GeneratedCode), CompilerError> {
        let ir = self.load_ir()?;

        // Phase 4: Validate
        self.validate(&ir)?;

        // Phase 5: Generate TypeScript code
        let generated = codegen::generate(&ir);
        Ok((ir, generated))
    }

    fn validate(&self, ir: &ir::ContentConfigIR) -> Result<(), CompilerError> {
        if self.config.skip_validation {
            return Ok(());
        }
        validate::validate_config(ir)
    }

    /// Writes generated code to the output path, creating parent directories.
    fn write_output(&self, generated: &GeneratedCode) -> Result<(), CompilerError> {
        let path = &self.config.out_path;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| CompilerError::io(parent, e.to_string()))?;
        }

        std::fs::write(path, &generated.content).map_err(|e| CompilerError::io(path, e.to_string()))
    }

    fn result(&self, ir: &ir::ContentConfigIR, generated: GeneratedCode) -> CompileResult {
        CompileResult {
            collections: ir.collections.len(),
            fields: ir.collections.iter().map(|c| c.widgets.len()).sum(),
            locales: ir.locales.clone(),
            constants: generated.constants,
            output_path: self.config.out_path.clone(),
        }
    }
}

/// Compiles config source text straight to the content config text.
///
/// Runs the same pipeline as [`Compiler::generate`] minus the file handling.
pub fn compile_str(
    source: &str,
    format: &str,
    path_prefix: Option<&str>,
) -> Result<String, CompilerError> {
    let frontend = frontend::create_frontend(format)?;
    let document = frontend.parse_document(source, std::path::Path::new("<input>"))?;
    let ir = to_ir::to_ir(&document, path_prefix)?;
    validate::validate_config(&ir)?;
    Ok(codegen::generate(&ir).content)
}

/// Result of a successful compilation.
#[derive(Debug, Clone)]
pub struct CompileResult {
    /// Number of collections compiled.
    pub collections: usize,
    /// Total number of top-level fields across all collections.
    pub fields: usize,
    /// Locales the collections were expanded over.
    pub locales: Vec<String>,
    /// Declared collection constants, in declaration order.
    pub constants: Vec<String>,
    /// Where the content config was (or would be) written.
    pub output_path: PathBuf,
}
