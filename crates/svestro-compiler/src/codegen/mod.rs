//! TypeScript code generation from the content config IR.
//!
//! The generator emits a single Astro content config module:
//! - Zod schema expressions for every widget (`zod`)
//! - `defineCollection` declarations and the `collections` export (`astro`)
//!
//! Generation is pure: it never fails and never re-validates the IR.

pub mod astro;
pub mod ts_syntax;
pub mod zod;

use crate::ir::ContentConfigIR;

/// Generated TypeScript code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    /// Content of the generated module.
    pub content: String,

    /// Names of the declared collection constants, in declaration order.
    pub constants: Vec<String>,
}

/// Generates the Astro content config module from the IR.
pub fn generate(config: &ContentConfigIR) -> GeneratedCode {
    GeneratedCode {
        content: astro::generate_content_config(config),
        constants: config.constant_names(),
    }
}
