//! Field descriptor → widget conversion.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. `name` is present and a non-blank string
//! 2. `widget` is present and names a supported widget
//! 3. `required`, when present, is a boolean (absent means required)
//! 4. kind-specific properties (`options`, `field`/`fields`, `collection`, `multiple`)

use serde_json::Value;

use crate::codegen::zod::enum_expr;
use crate::diagnostic::CompilerError;
use crate::ir::{Widget, WidgetKind, WidgetTag};

/// Maximum nesting of `list` widgets inside one field.
pub const MAX_LIST_DEPTH: usize = 32;

/// Converts one Sveltia field descriptor into a widget.
pub fn widget_from_field(field: &Value) -> Result<Widget, CompilerError> {
    build_widget(field, 0)
}

fn build_widget(field: &Value, depth: usize) -> Result<Widget, CompilerError> {
    let name = field_name(field)?;
    let tag = widget_tag(field, &name)?;
    let required = required_flag(field, &name)?;

    let kind = match tag {
        WidgetTag::Select => select_kind(field, &name)?,
        WidgetTag::List => list_kind(field, &name, depth)?,
        WidgetTag::Relation => relation_kind(field, &name)?,
        _ => WidgetKind::scalar(tag).ok_or_else(|| CompilerError::InvalidWidgetKind {
            field: name.clone(),
            kind: tag.to_string(),
        })?,
    };

    Ok(Widget::new(name, required, kind))
}

fn field_name(field: &Value) -> Result<String, CompilerError> {
    match field.get("name") {
        None => Err(CompilerError::missing("name", describe(field))),
        Some(Value::String(name)) if !name.trim().is_empty() => Ok(name.clone()),
        Some(_) => Err(CompilerError::invalid("name", describe(field))),
    }
}

fn widget_tag(field: &Value, name: &str) -> Result<WidgetTag, CompilerError> {
    let value = field
        .get("widget")
        .ok_or_else(|| CompilerError::missing("widget", format!("field {}", name)))?;

    let invalid = |kind: String| CompilerError::InvalidWidgetKind {
        field: name.to_string(),
        kind,
    };

    match value {
        Value::String(tag) => tag.parse::<WidgetTag>().map_err(|_| invalid(tag.clone())),
        other => Err(invalid(other.to_string())),
    }
}

fn required_flag(field: &Value, name: &str) -> Result<bool, CompilerError> {
    match field.get("required") {
        None => Ok(true),
        Some(Value::Bool(required)) => Ok(*required),
        Some(_) => Err(CompilerError::invalid("required", format!("field {}", name))),
    }
}

fn select_kind(field: &Value, name: &str) -> Result<WidgetKind, CompilerError> {
    let invalid = || CompilerError::InvalidOptions {
        field: name.to_string(),
    };

    let options = match field.get("options") {
        Some(Value::Array(options)) if !options.is_empty() => options,
        _ => return Err(invalid()),
    };

    // Options are either bare strings or `{ label, value }` objects.
    let values = options
        .iter()
        .map(|option| match option {
            Value::String(value) => Ok(value.clone()),
            Value::Object(map) => match map.get("value") {
                Some(Value::String(value)) => Ok(value.clone()),
                _ => Err(invalid()),
            },
            _ => Err(invalid()),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WidgetKind::Select {
        enumeration: enum_expr(&values),
        options: values,
    })
}

fn list_kind(field: &Value, name: &str, depth: usize) -> Result<WidgetKind, CompilerError> {
    if depth >= MAX_LIST_DEPTH {
        return Err(CompilerError::NestingTooDeep {
            field: name.to_string(),
            max_depth: MAX_LIST_DEPTH,
        });
    }

    let items = match (field.get("field"), field.get("fields")) {
        (Some(single @ Value::Object(_)), _) => vec![build_widget(single, depth + 1)?],
        (_, Some(Value::Array(fields))) if !fields.is_empty() => fields
            .iter()
            .map(|item| build_widget(item, depth + 1))
            .collect::<Result<Vec<_>, _>>()?,
        _ => {
            return Err(CompilerError::InvalidListFields {
                field: name.to_string(),
            })
        }
    };

    Ok(WidgetKind::List { items })
}

fn relation_kind(field: &Value, name: &str) -> Result<WidgetKind, CompilerError> {
    let collection = match field.get("collection") {
        Some(Value::String(collection)) if !collection.trim().is_empty() => collection.clone(),
        _ => {
            return Err(CompilerError::InvalidRelationTarget {
                field: name.to_string(),
            })
        }
    };

    let multiple = match field.get("multiple") {
        None => false,
        Some(Value::Bool(multiple)) => *multiple,
        Some(_) => return Err(CompilerError::invalid("multiple", format!("field {}", name))),
    };

    Ok(WidgetKind::Relation {
        collection,
        multiple,
    })
}

/// Describes a field that has no usable name yet.
fn describe(field: &Value) -> String {
    format!("field {}", field)
}
