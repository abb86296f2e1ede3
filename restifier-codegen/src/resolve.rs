//! Type-token resolution.

use indexmap::IndexMap;
use restifier_schema::OBJECT_TYPE;

use crate::{Error, Result};

/// A resolved target type and the import it drags in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetType {
    /// Type name as rendered into declarations
    pub name: String,
    /// Import path required by the type, if any
    pub import: Option<String>,
}

impl TargetType {
    /// A type that needs no import.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import: None,
        }
    }

    /// A type that requires an import.
    pub fn with_import(name: impl Into<String>, import: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import: Some(import.into()),
        }
    }
}

/// What a type token resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A scalar type, rendered inline
    Scalar(TargetType),
    /// The structured token: the column owns a nested object tree
    Object,
}

/// Token to target-type mapping.
///
/// Seeded by the backend's builtin table and extended from configuration;
/// iteration follows insertion order so listings stay deterministic.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    entries: IndexMap<String, TargetType>,
}

impl TypeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token. A later entry replaces an earlier one, which is how
    /// configuration overrides the builtin mapping.
    pub fn insert(&mut self, token: impl Into<String>, ty: TargetType) {
        self.entries.insert(token.into(), ty);
    }

    /// Resolve a type token.
    ///
    /// The structured sentinel resolves to [`Resolution::Object`] before the
    /// table is consulted. An unmapped token is a hard error; it is never
    /// passed through into the output as a raw string.
    pub fn resolve(&self, token: &str, context: &str) -> Result<Resolution> {
        if token == OBJECT_TYPE {
            return Ok(Resolution::Object);
        }
        match self.entries.get(token) {
            Some(ty) => Ok(Resolution::Scalar(ty.clone())),
            None => Err(Error::UnknownType {
                token: token.to_string(),
                context: context.to_string(),
            }),
        }
    }

    /// Mapped tokens in insertion order.
    ///
    /// The structured sentinel is not an entry and never appears here.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_resolves_before_lookup() {
        let table = TypeTable::new();
        assert_eq!(
            table.resolve("json", "column 'meta'").unwrap(),
            Resolution::Object
        );
    }

    #[test]
    fn test_unknown_token_is_an_error() {
        let table = TypeTable::new();
        let err = table.resolve("uuid", "column 'id'").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownType {
                token: "uuid".to_string(),
                context: "column 'id'".to_string(),
            }
        );
    }

    #[test]
    fn test_scalar_resolution() {
        let mut table = TypeTable::new();
        table.insert("timestamp", TargetType::with_import("time.Time", "time"));

        let Resolution::Scalar(ty) = table.resolve("timestamp", "column 'at'").unwrap() else {
            panic!("expected scalar resolution");
        };
        assert_eq!(ty.name, "time.Time");
        assert_eq!(ty.import.as_deref(), Some("time"));
    }

    #[test]
    fn test_later_insert_overrides() {
        let mut table = TypeTable::new();
        table.insert("string", TargetType::new("string"));
        table.insert("string", TargetType::new("sql.NullString"));

        let Resolution::Scalar(ty) = table.resolve("string", "column 'name'").unwrap() else {
            panic!("expected scalar resolution");
        };
        assert_eq!(ty.name, "sql.NullString");
        assert_eq!(table.tokens().count(), 1);
    }

    #[test]
    fn test_tokens_follow_insertion_order() {
        let mut table = TypeTable::new();
        table.insert("text", TargetType::new("string"));
        table.insert("timestamp", TargetType::with_import("time.Time", "time"));

        let tokens: Vec<&str> = table.tokens().collect();
        assert_eq!(tokens, vec!["text", "timestamp"]);
    }
}
