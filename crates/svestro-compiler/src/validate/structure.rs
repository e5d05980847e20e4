//! Structure validation for the generated module.
//!
//! Collection constants become TypeScript bindings, so their names must be
//! identifiers and must not collide with each other or with the module's
//! imports and export. Field names must be unique per record.

use std::collections::HashSet;

use crate::codegen::astro::RESERVED_BINDINGS;
use crate::codegen::ts_syntax::is_identifier;
use crate::diagnostic::CompilerError;
use crate::ir::{ContentConfigIR, Widget, WidgetKind};

/// Validates the constant names declared for every collection.
pub fn validate_constants(config: &ContentConfigIR) -> Result<(), CompilerError> {
    let mut seen: HashSet<String> = RESERVED_BINDINGS.iter().map(|n| n.to_string()).collect();
    for name in config.constant_names() {
        if !is_identifier(&name) {
            return Err(CompilerError::InvalidIdentifier { name });
        }
        if !seen.insert(name.clone()) {
            return Err(CompilerError::DuplicateCollection { name });
        }
    }
    Ok(())
}

/// Validates that no record declares the same field twice.
pub fn validate_fields(config: &ContentConfigIR) -> Result<(), CompilerError> {
    for collection in &config.collections {
        validate_record(&collection.widgets, &format!("collection {}", collection.name))?;
    }
    Ok(())
}

fn validate_record(widgets: &[Widget], context: &str) -> Result<(), CompilerError> {
    let mut seen = HashSet::new();
    for widget in widgets {
        if !seen.insert(widget.name.as_str()) {
            return Err(CompilerError::DuplicateField {
                field: widget.name.clone(),
                context: context.to_string(),
            });
        }
        if let WidgetKind::List { items } = &widget.kind {
            validate_record(items, &format!("list {}", widget.name))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::CollectionIR;

    fn collection(name: &str, widgets: Vec<Widget>) -> CollectionIR {
        CollectionIR::new(name, format!("content/{}", name), widgets, None)
    }

    #[test]
    fn test_valid_constants() {
        let config = ContentConfigIR::new(
            vec![collection("blog", vec![]), collection("pages", vec![])],
            vec!["en".into(), "fr".into()],
        );
        assert!(validate_constants(&config).is_ok());
    }

    #[test]
    fn test_hyphenated_collection_name() {
        let config = ContentConfigIR::new(vec![collection("blog-posts", vec![])], vec![]);
        assert_eq!(
            validate_constants(&config),
            Err(CompilerError::InvalidIdentifier { name: "blog-posts".into() })
        );
    }

    #[test]
    fn test_region_locale_is_not_an_identifier() {
        let config = ContentConfigIR::new(vec![collection("blog", vec![])], vec!["pt-BR".into()]);
        assert_eq!(
            validate_constants(&config),
            Err(CompilerError::InvalidIdentifier { name: "blog_pt-BR".into() })
        );
    }

    #[test]
    fn test_duplicate_collection() {
        let config = ContentConfigIR::new(
            vec![collection("blog", vec![]), collection("blog", vec![])],
            vec![],
        );
        assert_eq!(
            validate_constants(&config),
            Err(CompilerError::DuplicateCollection { name: "blog".into() })
        );
    }

    #[test]
    fn test_locale_suffix_collision() {
        let config = ContentConfigIR::new(
            vec![collection("blog", vec![]), collection("blog_en", vec![])],
            vec![],
        );
        assert!(validate_constants(&config).is_ok());

        let config = ContentConfigIR::new(
            vec![collection("a_b", vec![]), collection("a", vec![])],
            vec!["b_c".into(), "c".into()],
        );
        // a_b_c collides with a + b_c
        assert_eq!(
            validate_constants(&config),
            Err(CompilerError::DuplicateCollection { name: "a_b_c".into() })
        );
    }

    #[test]
    fn test_module_bindings_are_taken() {
        for name in ["collections", "z", "glob", "reference", "defineCollection"] {
            let config = ContentConfigIR::new(vec![collection(name, vec![])], vec![]);
            assert_eq!(
                validate_constants(&config),
                Err(CompilerError::DuplicateCollection { name: name.into() })
            );
        }
    }

    #[test]
    fn test_module_binding_after_other_collections() {
        let config = ContentConfigIR::new(vec![collection("blog", vec![]), collection("z", vec![])], vec![]);
        assert_eq!(
            validate_constants(&config),
            Err(CompilerError::DuplicateCollection { name: "z".into() })
        );
    }

    #[test]
    fn test_strict_mode_names() {
        for name in ["eval", "arguments"] {
            let config = ContentConfigIR::new(vec![collection(name, vec![])], vec![]);
            assert_eq!(
                validate_constants(&config),
                Err(CompilerError::InvalidIdentifier { name: name.into() })
            );
        }
    }

    #[test]
    fn test_duplicate_field_in_list() {
        let items = vec![
            Widget::new("url", true, WidgetKind::String),
            Widget::new("url", true, WidgetKind::String),
        ];
        let config = ContentConfigIR::new(
            vec![collection("blog", vec![Widget::new("links", false, WidgetKind::List { items })])],
            vec![],
        );
        assert_eq!(
            validate_fields(&config),
            Err(CompilerError::DuplicateField {
                field: "url".into(),
                context: "list links".into(),
            })
        );
    }
}
