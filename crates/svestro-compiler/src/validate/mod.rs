//! Validation of the content config IR.

mod structure;

use crate::diagnostic::CompilerError;
use crate::ir::ContentConfigIR;

/// Validates the entire content config.
pub fn validate_config(config: &ContentConfigIR) -> Result<(), CompilerError> {
    // Constants become TypeScript bindings
    structure::validate_constants(config)?;

    // Records must not repeat a key
    structure::validate_fields(config)?;

    Ok(())
}
