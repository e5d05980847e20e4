//! Collection descriptor → collection IR conversion.

use serde_json::Value;

use crate::diagnostic::CompilerError;
use crate::ir::CollectionIR;
use super::widget::widget_from_field;

/// Converts one Sveltia collection descriptor into a collection.
///
/// Checks `name`, then `folder`, then `fields`. Any failing field aborts the
/// whole collection.
pub fn collection_from_descriptor(
    descriptor: &Value,
    path_prefix: Option<&str>,
) -> Result<CollectionIR, CompilerError> {
    let name = required_string(descriptor, "name", "collection configuration")?;
    let context = format!("collection {}", name);
    let folder = required_string(descriptor, "folder", &context)?;

    let fields = match descriptor.get("fields") {
        None => return Err(CompilerError::missing("fields", context)),
        Some(Value::Array(fields)) => fields,
        Some(_) => return Err(CompilerError::invalid("fields", context)),
    };

    let widgets = fields
        .iter()
        .map(widget_from_field)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CollectionIR::new(
        name,
        folder,
        widgets,
        normalize_prefix(path_prefix),
    ))
}

/// An empty prefix counts as no prefix. Anything else is kept verbatim.
pub fn normalize_prefix(path_prefix: Option<&str>) -> Option<String> {
    path_prefix
        .filter(|prefix| !prefix.is_empty())
        .map(String::from)
}

fn required_string(descriptor: &Value, key: &str, context: &str) -> Result<String, CompilerError> {
    match descriptor.get(key) {
        None => Err(CompilerError::missing(key, context)),
        Some(Value::String(value)) if !value.trim().is_empty() => Ok(value.clone()),
        Some(_) => Err(CompilerError::invalid(key, context)),
    }
}
