//! Astro content config generation.
//!
//! Produces `src/content/config.ts`: the import preamble, one
//! `defineCollection` constant per collection (or per collection and locale),
//! and the `collections` export.

use crate::ir::{CollectionIR, ContentConfigIR};
use super::ts_syntax::string_literal;
use super::zod::block_object_expr;

pub const IMPORT_CONTENT: &str = "import { defineCollection, z, reference } from \"astro:content\";";
pub const IMPORT_LOADERS: &str = "import { glob } from \"astro/loaders\";";
pub const DEFINE_COLLECTION: &str = "defineCollection";
pub const GLOB_LOADER: &str = "glob";
pub const ENTRY_PATTERN: &str = "**/*.md";
pub const EXPORT_NAME: &str = "collections";

/// Names the preamble and the export already bind in the generated module.
pub const RESERVED_BINDINGS: &[&str] = &[DEFINE_COLLECTION, "z", "reference", GLOB_LOADER, EXPORT_NAME];

/// Indentation of fields inside the top-level record schema.
const SCHEMA_FIELD_INDENT: usize = 8;

/// The `defineCollection({...})` expression for one collection and locale.
pub fn collection_definition(collection: &CollectionIR, locale: Option<&str>) -> String {
    let mut output = format!("{}({{\n", DEFINE_COLLECTION);
    output.push_str(&format!(
        "    loader: {}({{ pattern: {}, base: {} }}),\n",
        GLOB_LOADER,
        string_literal(ENTRY_PATTERN),
        string_literal(&collection.base_path(locale)),
    ));
    output.push_str(&format!(
        "    schema: {},\n",
        block_object_expr(&collection.widgets, SCHEMA_FIELD_INDENT)
    ));
    output.push_str("})");
    output
}

/// `const <name> = defineCollection({...});`
pub fn collection_declaration(collection: &CollectionIR, locale: Option<&str>) -> String {
    format!(
        "const {} = {};",
        collection.constant_name(locale),
        collection_definition(collection, locale)
    )
}

/// `export const collections = { a, b };`
pub fn export_statement(names: &[String]) -> String {
    if names.is_empty() {
        return format!("export const {} = {{}};", EXPORT_NAME);
    }
    format!("export const {} = {{ {} }};", EXPORT_NAME, names.join(", "))
}

/// Generates the complete content config document.
pub fn generate_content_config(config: &ContentConfigIR) -> String {
    let mut output = String::new();
    output.push_str(IMPORT_CONTENT);
    output.push('\n');
    output.push_str(IMPORT_LOADERS);
    output.push_str("\n\n");

    let declarations: Vec<String> = config
        .declarations()
        .into_iter()
        .map(|(collection, locale)| collection_declaration(collection, locale))
        .collect();

    if !declarations.is_empty() {
        output.push_str(&declarations.join("\n\n"));
        output.push_str("\n\n");
    }

    output.push_str(&export_statement(&config.constant_names()));
    output.push('\n');
    output
}
