//! TypeScript lexical helpers shared by the generators.

/// Words that cannot be used as a binding name in a TypeScript module.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Returns true if `s` can be used as a TypeScript identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return false;
    }
    !RESERVED_WORDS.contains(&s)
}

/// Renders a double-quoted string literal.
pub fn string_literal(s: &str) -> String {
    // JSON string syntax is a subset of TypeScript string syntax.
    serde_json::Value::String(s.to_string()).to_string()
}

/// Renders an object literal key, quoting it only when it is not an identifier.
///
/// Reserved words are fine as property names, so only the lexical shape matters.
pub fn object_key(s: &str) -> String {
    if is_identifier(s) || RESERVED_WORDS.contains(&s) {
        s.to_string()
    } else {
        string_literal(s)
    }
}
