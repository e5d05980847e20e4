//! End-to-end tests for the Svestro compiler.

use std::path::{Path, PathBuf};

use svestro_compiler::{compile_str, Compiler, CompilerConfig, CompilerError};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn compiler(config: &str, out_dir: &Path, prefix: Option<&str>) -> Compiler {
    Compiler::new(CompilerConfig {
        config_path: fixture(config),
        out_path: out_dir.join("config.ts"),
        path_prefix: prefix.map(String::from),
        ..CompilerConfig::default()
    })
}

#[test]
fn compiles_basic_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = compiler("basic-config.yml", dir.path(), None).compile().unwrap();

    assert_eq!(result.collections, 2);
    assert_eq!(result.fields, 6);
    assert!(result.locales.is_empty());
    assert_eq!(result.constants, vec!["blog", "pages"]);

    let content = std::fs::read_to_string(dir.path().join("config.ts")).unwrap();
    assert!(content.starts_with(
        "import { defineCollection, z, reference } from \"astro:content\";\nimport { glob } from \"astro/loaders\";\n"
    ));
    assert!(content.contains("const blog = defineCollection({"));
    assert!(content.contains("const pages = defineCollection({"));
    assert!(content.contains("pattern: \"**/*.md\""));
    assert!(content.contains("base: \"content/blog\""));
    assert!(content.contains("base: \"content/pages\""));
    assert!(content.contains("title: z.string(),"));
    assert!(content.contains("date: z.coerce.date(),"));
    assert!(content.contains("body: z.string(),"));
    assert!(content.contains("featured: z.boolean(),"));
    assert!(content.contains("slug: z.string(),"));
    assert!(content.ends_with("export const collections = { blog, pages };\n"));
}

#[test]
fn keeps_field_order() {
    let dir = tempfile::TempDir::new().unwrap();
    let generated = compiler("basic-config.yml", dir.path(), None).generate().unwrap();

    let positions: Vec<usize> = ["title:", "date:", "body:", "featured:"]
        .iter()
        .map(|key| generated.content.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn expands_locales() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = compiler("i18n-config.yml", dir.path(), None).compile().unwrap();

    assert_eq!(result.locales, vec!["en", "fr", "de"]);
    assert_eq!(result.constants.len(), 6);

    let content = std::fs::read_to_string(&result.output_path).unwrap();
    for name in ["blog_en", "blog_fr", "blog_de", "pages_en", "pages_fr", "pages_de"] {
        assert_eq!(content.matches(&format!("const {} = ", name)).count(), 1);
    }
    assert!(content.contains("base: \"content/blog/en\""));
    assert!(content.contains("base: \"content/blog/fr\""));
    assert!(content.contains("base: \"content/blog/de\""));
    assert!(content.contains(
        "export const collections = { blog_en, blog_fr, blog_de, pages_en, pages_fr, pages_de };"
    ));
    assert!(!content.contains("const blog = "));
}

#[test]
fn applies_path_prefix() {
    let dir = tempfile::TempDir::new().unwrap();
    let generated = compiler("basic-config.yml", dir.path(), Some("src/content"))
        .generate()
        .unwrap();

    assert!(generated.content.contains("base: \"src/content/content/blog\""));
    assert!(generated.content.contains("base: \"src/content/content/pages\""));
}

#[test]
fn applies_path_prefix_with_locales() {
    let dir = tempfile::TempDir::new().unwrap();
    let generated = compiler("i18n-config.yml", dir.path(), Some("src/content"))
        .generate()
        .unwrap();

    assert!(generated.content.contains("base: \"src/content/content/pages/de\""));
}

#[test]
fn keeps_prefix_verbatim() {
    let source = "collections:\n  - { name: blog, folder: content/blog, fields: [] }\n";

    let rooted = compile_str(source, "yaml", Some("/")).unwrap();
    assert!(rooted.contains("base: \"//content/blog\""));

    let trailing = compile_str(source, "yaml", Some("src/")).unwrap();
    assert!(trailing.contains("base: \"src//content/blog\""));

    let empty = compile_str(source, "yaml", Some("")).unwrap();
    assert!(empty.contains("base: \"content/blog\""));
}

#[test]
fn handles_complex_widgets() {
    let dir = tempfile::TempDir::new().unwrap();
    let content = compiler("complex-widgets-config.yml", dir.path(), None)
        .generate()
        .unwrap()
        .content;

    let expected = [
        "title: z.string(),",
        "price: z.number(),",
        "description: z.string().nullable().optional(),",
        "available: z.boolean(),",
        "releaseDate: z.coerce.date(),",
        "expiresAt: z.union([z.string().transform((val) => (val === \"\" ? undefined : new Date(val))), z.date()]).optional(),",
        "images: z.string(),",
        "manual: z.string().nullable().optional(),",
        "category: z.enum([\"electronics\", \"clothing\", \"books\"]),",
        "condition: z.enum([\"new\", \"used\"]),",
        "tags: z.array(z.string()).nullable().optional(),",
        "specs: z.array(z.object({ key: z.string(), value: z.string().nullable().optional() })).nullable().optional(),",
        "color: z.string(),",
        "code: z.string(),",
        "uuid: z.string().uuid(),",
        "brand: reference(\"brands\"),",
        "related: z.array(reference(\"products\")).nullable().optional(),",
    ];
    for line in expected {
        assert!(content.contains(line), "missing `{}` in:\n{}", line, content);
    }
}

#[test]
fn creates_output_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("nested").join("deep").join("directory");
    assert!(!nested.exists());

    compiler("basic-config.yml", &nested, None).compile().unwrap();

    assert!(nested.join("config.ts").exists());
}

#[test]
fn missing_input_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = compiler("non-existent.yml", dir.path(), None).compile().unwrap_err();

    assert!(matches!(err, CompilerError::IoError { .. }));
    assert!(!dir.path().join("config.ts").exists());
}

#[test]
fn invalid_config_writes_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = compiler("invalid-config.yml", dir.path(), None).compile().unwrap_err();

    assert_eq!(
        err,
        CompilerError::MissingField {
            field: "widget".into(),
            context: "field title".into(),
        }
    );
    assert!(!dir.path().join("config.ts").exists());
}

#[test]
fn check_does_not_write() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = compiler("i18n-config.yml", dir.path(), None).check().unwrap();

    assert_eq!(result.collections, 2);
    assert_eq!(result.constants.len(), 6);
    assert!(!result.output_path.exists());
}

#[test]
fn reads_json_configs() {
    let dir = tempfile::TempDir::new().unwrap();
    let content = compiler("config.json", dir.path(), None).generate().unwrap().content;

    assert!(content.contains("const notes = defineCollection({"));
    assert!(content.contains("export const collections = { notes };"));
}

#[test]
fn explicit_format_overrides_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let compiler = Compiler::new(CompilerConfig {
        config_path: fixture("basic-config.yml"),
        out_path: dir.path().join("config.ts"),
        format: Some("json".into()),
        ..CompilerConfig::default()
    });

    assert!(matches!(compiler.generate(), Err(CompilerError::ParseFailed { .. })));
}

#[test]
fn generation_is_idempotent() {
    let source = std::fs::read_to_string(fixture("complex-widgets-config.yml")).unwrap();
    let first = compile_str(&source, "yaml", Some("src")).unwrap();
    let second = compile_str(&source, "yaml", Some("src")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn end_to_end_blog_example() {
    let source = r#"
collections:
  - name: blog
    folder: content/blog
    fields:
      - { name: title, widget: string }
      - { name: date, widget: datetime }
"#;
    let output = compile_str(source, "yaml", None).unwrap();
    let expected = "\
import { defineCollection, z, reference } from \"astro:content\";
import { glob } from \"astro/loaders\";

const blog = defineCollection({
    loader: glob({ pattern: \"**/*.md\", base: \"content/blog\" }),
    schema: z.object({
        title: z.string(),
        date: z.coerce.date(),
    }),
});

export const collections = { blog };
";
    assert_eq!(output, expected);
}

#[test]
fn rejects_non_identifier_collection_names() {
    let source = r#"
collections:
  - { name: blog-posts, folder: content/blog, fields: [] }
"#;
    let err = compile_str(source, "yaml", None).unwrap_err();
    assert_eq!(err, CompilerError::InvalidIdentifier { name: "blog-posts".into() });
}

#[test]
fn rejects_collections_shadowing_module_bindings() {
    for name in ["collections", "z", "glob", "reference", "defineCollection"] {
        let source = format!("collections:\n  - {{ name: {}, folder: content/x, fields: [] }}\n", name);
        let err = compile_str(&source, "yaml", None).unwrap_err();
        assert_eq!(err, CompilerError::DuplicateCollection { name: name.into() });
    }

    let source = "collections:\n  - { name: eval, folder: content/x, fields: [] }\n";
    let err = compile_str(source, "yaml", None).unwrap_err();
    assert_eq!(err, CompilerError::InvalidIdentifier { name: "eval".into() });
}

#[test]
fn skip_validation_allows_non_identifier_names() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join("config.yml");
    std::fs::write(
        &config_path,
        "collections:\n  - { name: blog-posts, folder: content/blog, fields: [] }\n",
    )
    .unwrap();

    let compiler = Compiler::new(CompilerConfig {
        config_path,
        out_path: dir.path().join("config.ts"),
        skip_validation: true,
        ..CompilerConfig::default()
    });

    assert!(compiler.generate().unwrap().content.contains("const blog-posts = "));
}
