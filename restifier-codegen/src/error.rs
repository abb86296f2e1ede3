//! Error types for the emission engine.

use thiserror::Error;

/// Result type for emission operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while emitting declarations for one schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A structured column reached the engine without its object tree.
    #[error("structured column has no object tree to traverse")]
    MissingNode,

    /// A type token with no mapping; never rendered raw into the output.
    #[error("unknown type '{token}' in {context}")]
    UnknownType { token: String, context: String },

    /// The structured token is only meaningful on columns.
    #[error("field '{field}' uses the structured column type; objects cannot nest as leaf fields")]
    ObjectField { field: String },

    /// Two nodes synthesized the same declaration name.
    #[error("nested type '{type_name}' is declared more than once in table '{table}'")]
    DuplicateObjectType { type_name: String, table: String },

    /// Two tables synthesized the same artifact names.
    #[error("tables '{first}' and '{second}' both generate '{stem}.go' artifacts")]
    DuplicateTable {
        first: String,
        second: String,
        stem: String,
    },
}
