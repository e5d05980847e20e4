//! Compiler error types.
#![allow(unused_assignments)]

use std::path::PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur during compilation.
///
/// Every error is terminal for the current run: the pipeline stops at the first
/// one and nothing is written.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum CompilerError {
    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("Failed to access file '{}': {message}", path.display())]
    #[diagnostic(code(svestro::io::io_error))]
    IoError {
        path: PathBuf,
        message: String,
    },

    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("Failed to parse config file '{}': {message}", path.display())]
    #[diagnostic(
        code(svestro::parse::parse_failed),
        help("The Sveltia config must be a YAML (or JSON) document")
    )]
    ParseFailed {
        path: PathBuf,
        message: String,
    },

    #[error("Unsupported config format: {format}")]
    #[diagnostic(
        code(svestro::frontend::unsupported_format),
        help("Supported formats are: yaml, yml, json")
    )]
    UnsupportedFormat {
        format: String,
    },

    // =========================================================================
    // Descriptor Errors
    // =========================================================================
    #[error("Missing '{field}' property in {context}")]
    #[diagnostic(code(svestro::descriptor::missing_field))]
    MissingField {
        field: String,
        context: String,
    },

    #[error("Invalid '{field}' property in {context}")]
    #[diagnostic(code(svestro::descriptor::invalid_field_type))]
    InvalidFieldType {
        field: String,
        context: String,
    },

    #[error("Invalid 'widget' property in field {field}. Received {kind}")]
    #[diagnostic(
        code(svestro::widget::invalid_kind),
        help("Supported widgets are: boolean, code, color, datetime, file, image, list, markdown, number, relation, select, string, uuid")
    )]
    InvalidWidgetKind {
        field: String,
        kind: String,
    },

    #[error("Missing or invalid 'options' property in select field {field}")]
    #[diagnostic(
        code(svestro::widget::invalid_options),
        help("Options must be a non-empty list of strings or of {{ label, value }} objects with a string value")
    )]
    InvalidOptions {
        field: String,
    },

    #[error("Missing or invalid 'fields' property in list {field}")]
    #[diagnostic(
        code(svestro::widget::invalid_list_fields),
        help("A list needs either a single 'field' object or a non-empty 'fields' list")
    )]
    InvalidListFields {
        field: String,
    },

    #[error("Missing or invalid 'collection' property in relation field {field}")]
    #[diagnostic(code(svestro::widget::invalid_relation_target))]
    InvalidRelationTarget {
        field: String,
    },

    #[error("List field {field} is nested more than {max_depth} levels deep")]
    #[diagnostic(code(svestro::widget::nesting_too_deep))]
    NestingTooDeep {
        field: String,
        max_depth: usize,
    },

    // =========================================================================
    // Structure Errors
    // =========================================================================
    #[error("'{name}' is not a valid identifier for a collection constant")]
    #[diagnostic(
        code(svestro::structure::invalid_identifier),
        help("Collection names (and locale codes) become TypeScript constant names: use letters, digits, '_' or '$'")
    )]
    InvalidIdentifier {
        name: String,
    },

    #[error("Collection constant '{name}' is declared more than once")]
    #[diagnostic(
        code(svestro::structure::duplicate_collection),
        help("Constant names must be unique and must not shadow defineCollection, z, reference, glob or collections")
    )]
    DuplicateCollection {
        name: String,
    },

    #[error("Field '{field}' is declared more than once in {context}")]
    #[diagnostic(code(svestro::structure::duplicate_field))]
    DuplicateField {
        field: String,
        context: String,
    },
}

impl CompilerError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::IoError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a missing-property error.
    pub fn missing(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Creates a wrong-kind-of-property error.
    pub fn invalid(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::InvalidFieldType {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Name of the offending property for descriptor errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field, .. } | Self::InvalidFieldType { field, .. } => Some(field),
            _ => None,
        }
    }
}
