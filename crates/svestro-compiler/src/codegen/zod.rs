//! Zod schema expressions for widgets.
//!
//! Every literal fragment of the generated Zod syntax lives in a named constant
//! so the output format has one definition.

use crate::ir::{Widget, WidgetKind};
use super::ts_syntax::{object_key, string_literal};

pub const Z_STRING: &str = "z.string()";
pub const Z_NUMBER: &str = "z.number()";
pub const Z_BOOLEAN: &str = "z.boolean()";
pub const Z_UUID: &str = "z.string().uuid()";
pub const Z_COERCE_DATE: &str = "z.coerce.date()";

/// Optional datetime: Sveltia writes `""` for an empty date, which maps to absent.
pub const Z_OPTIONAL_DATE: &str = "z.union([z.string().transform((val) => (val === \"\" ? undefined : new Date(val))), z.date()]).optional()";

/// Appended to every non-required field except datetime.
pub const OPTIONAL_SUFFIX: &str = ".nullable().optional()";

/// Wraps an item schema in a Zod array.
pub fn array_expr(item: &str) -> String {
    format!("z.array({})", item)
}

/// Builds a Zod enum from option values, preserving order.
pub fn enum_expr(options: &[String]) -> String {
    let values: Vec<String> = options.iter().map(|o| string_literal(o)).collect();
    format!("z.enum([{}])", values.join(", "))
}

/// Typed reference to another collection.
pub fn reference_expr(collection: &str) -> String {
    format!("reference({})", string_literal(collection))
}

/// Inline object schema: `z.object({ a: ..., b: ... })`.
pub fn inline_object_expr(widgets: &[Widget]) -> String {
    if widgets.is_empty() {
        return "z.object({})".to_string();
    }
    let fields: Vec<String> = widgets.iter().map(field_entry).collect();
    format!("z.object({{ {} }})", fields.join(", "))
}

/// Multi-line object schema with each field on its own line at `indent`.
pub fn block_object_expr(widgets: &[Widget], indent: usize) -> String {
    if widgets.is_empty() {
        return "z.object({})".to_string();
    }
    let spaces = " ".repeat(indent);
    let closing = " ".repeat(indent.saturating_sub(4));

    let mut output = String::from("z.object({\n");
    for widget in widgets {
        output.push_str(&format!("{}{},\n", spaces, field_entry(widget)));
    }
    output.push_str(&format!("{}}})", closing));
    output
}

/// `name: <expr>` for one record field.
pub fn field_entry(widget: &Widget) -> String {
    format!("{}: {}", object_key(&widget.name), type_expr(widget))
}

/// Full schema expression for a widget, including optionality.
pub fn type_expr(widget: &Widget) -> String {
    let base = base_expr(widget);
    match widget.kind {
        // Datetime carries optionality in its base expression.
        WidgetKind::DateTime => base,
        _ if widget.required => base,
        _ => format!("{}{}", base, OPTIONAL_SUFFIX),
    }
}

/// Schema expression for a widget without the optionality suffix.
pub fn base_expr(widget: &Widget) -> String {
    match &widget.kind {
        WidgetKind::String
        | WidgetKind::Markdown
        | WidgetKind::Image
        | WidgetKind::File
        | WidgetKind::Code
        | WidgetKind::Color => Z_STRING.to_string(),
        WidgetKind::Number => Z_NUMBER.to_string(),
        WidgetKind::Boolean => Z_BOOLEAN.to_string(),
        WidgetKind::Uuid => Z_UUID.to_string(),
        WidgetKind::DateTime if widget.required => Z_COERCE_DATE.to_string(),
        WidgetKind::DateTime => Z_OPTIONAL_DATE.to_string(),
        WidgetKind::Select { enumeration, .. } => enumeration.clone(),
        WidgetKind::Relation { collection, multiple } => {
            let reference = reference_expr(collection);
            if *multiple {
                array_expr(&reference)
            } else {
                reference
            }
        }
        WidgetKind::List { items } => match items.as_slice() {
            [single] => array_expr(&base_expr(single)),
            _ => array_expr(&inline_object_expr(items)),
        },
    }
}
