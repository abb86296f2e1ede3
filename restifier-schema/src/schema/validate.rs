//! Validation context and utilities for schema parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Encapsulates the source content, filename, and current path through the
/// schema hierarchy, so recursive validation can produce errors that say
/// where in the tree a name lives.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["meta", "note"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    ///
    /// Used when descending into nested nodes.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'meta.note'" or just "column" at the top level.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a usable identifier.
    ///
    /// Checks for Go reserved keywords and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_go_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }
}

/// Go reserved keywords that cannot be used as identifiers
/// Source: https://go.dev/ref/spec#Keywords
pub(crate) const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Check if a name is a Go reserved keyword
pub(crate) fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source
/// Searches for `name = "value"` entries and `[types.name]` style headers
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Array-of-tables entries spell names as name = "value"
    let quoted = [
        format!("name = \"{name}\""),
        format!("name = '{name}'"),
    ];
    for pattern in &quoted {
        if let Some(pos) = src.find(pattern.as_str()) {
            // The name starts after 'name = "' (8 characters)
            return Some(SourceSpan::from((pos + 8, name.len())));
        }
    }

    // Dotted table headers, e.g. [types.uuid]
    let headers = [format!(".{name}]"), format!(".{name}.")];
    for pattern in &headers {
        if let Some(pos) = src.find(pattern.as_str()) {
            // +1 to skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // No fallback - better to have no span than point to a wrong location
    None
}

/// Validate that a name is a plain identifier.
/// Returns None if valid, Some(reason) if invalid.
///
/// Names end up in Go struct tags and SQL column references, so only
/// letters, numbers, and underscores are accepted.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Some("name must contain only letters, numbers, and underscores");
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("user").is_none());
        assert!(validate_identifier("created_at").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("line2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2fa").is_some());
        assert!(validate_identifier("created-at").is_some());
        assert!(validate_identifier("created at").is_some());
        assert!(validate_identifier("naïve").is_some());
    }

    #[test]
    fn test_is_go_keyword() {
        assert!(is_go_keyword("type"));
        assert!(is_go_keyword("func"));
        assert!(is_go_keyword("select"));
        assert!(!is_go_keyword("user"));
        assert!(!is_go_keyword("int"));
    }

    #[test]
    fn test_find_name_span_array_entry() {
        let src = "[[columns]]\nname = \"id\"\ntype = \"int\"";
        let span = find_name_span(src, "id").unwrap();
        assert_eq!(span.offset(), 20);
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn test_find_name_span_table_header() {
        let src = "[types.uuid]\ntarget = \"uuid.UUID\"";
        let span = find_name_span(src, "uuid").unwrap();
        assert_eq!(span.offset(), 7);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_find_name_span_not_in_quoted_value() {
        let src = "description = \"the type of thing\"";
        assert!(find_name_span(src, "type").is_none());
    }

    #[test]
    fn test_parse_context_push_and_context_for() {
        let ctx = ParseContext::new("", "user.toml");
        assert_eq!(ctx.context_for("column"), "column");

        let nested = ctx.push("meta").push("note");
        assert_eq!(nested.path_string(), "meta.note");
        assert_eq!(nested.context_for("field"), "field in 'meta.note'");
    }

    #[test]
    fn test_parse_context_validate_name() {
        let ctx = ParseContext::new("name = \"func\"", "user.toml");
        assert!(ctx.validate_name("email", "column").is_ok());

        let err = ctx.validate_name("func", "column").unwrap_err();
        assert!(err.to_string().contains("reserved keyword"));

        let err = ctx.validate_name("2fa", "column").unwrap_err();
        assert!(err.to_string().contains("invalid column name"));
    }
}
