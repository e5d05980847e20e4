//! Convert an untyped Sveltia config document to the typed IR.
//!
//! This is the only place that inspects the untyped document. Everything
//! downstream works on [`ContentConfigIR`] and never re-validates it.

mod collection;
mod widget;

pub use collection::{collection_from_descriptor, normalize_prefix};
pub use widget::{widget_from_field, MAX_LIST_DEPTH};

use serde_json::Value;

use crate::diagnostic::CompilerError;
use crate::ir::ContentConfigIR;

/// Converts a parsed Sveltia config into the content config IR.
pub fn to_ir(document: &Value, path_prefix: Option<&str>) -> Result<ContentConfigIR, CompilerError> {
    if !document.is_object() {
        return Err(CompilerError::invalid("root", "config document"));
    }

    let descriptors = match document.get("collections") {
        None => return Err(CompilerError::missing("collections", "config document")),
        Some(Value::Array(descriptors)) => descriptors,
        Some(_) => return Err(CompilerError::invalid("collections", "config document")),
    };

    let mut collections = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        if !descriptor.is_object() {
            return Err(CompilerError::invalid("collections", "config document"));
        }
        collections.push(collection_from_descriptor(descriptor, path_prefix)?);
    }

    let locales = parse_locales(document)?;

    Ok(ContentConfigIR::new(collections, locales))
}

/// Extracts `i18n.locales`. Missing `i18n` or `locales` means no localization.
pub fn parse_locales(document: &Value) -> Result<Vec<String>, CompilerError> {
    let Some(i18n) = document.get("i18n") else {
        return Ok(Vec::new());
    };

    let invalid = || CompilerError::invalid("i18n.locales", "config document");

    match i18n.get("locales") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(locales)) => locales
            .iter()
            .map(|locale| match locale {
                Value::String(locale) if !locale.trim().is_empty() => Ok(locale.clone()),
                _ => Err(invalid()),
            })
            .collect(),
        Some(_) => Err(invalid()),
    }
}
