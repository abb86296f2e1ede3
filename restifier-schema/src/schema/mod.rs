//! Table schema types loaded from TOML files.

mod parse;
mod validate;

pub use parse::{load_schema_dir, parse_schema};
use serde::Deserialize;
pub use validate::ParseContext;

/// Type token marking a column as a structured (nested object) column.
pub const OBJECT_TYPE: &str = "json";

/// A table definition loaded from a single schema file.
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    /// Table name; also the stem of the emitted files
    pub name: String,

    /// Columns in declaration order
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// A single table column.
#[derive(Debug, Clone, Deserialize)]
pub struct Column {
    pub name: String,

    /// Abstract type token, resolved by the generator
    #[serde(rename = "type")]
    pub ty: String,

    /// Hidden columns are kept in the model but pruned from the DTO
    #[serde(default)]
    pub hidden: bool,

    /// Nested object tree; present iff `type` is the structured token
    pub object: Option<Node>,
}

/// A nested object inside a structured column.
///
/// The root node of a column carries the column's own name and visibility;
/// the loader fills it in after parsing. Child nodes name themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub hidden: bool,

    /// Leaf members in declaration order
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Nested objects in declaration order
    #[serde(default)]
    pub children: Vec<Node>,
}

/// A leaf member of a node.
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub name: String,

    /// Abstract type token, resolved by the generator
    #[serde(rename = "type")]
    pub ty: String,

    /// Hidden fields are kept in the model but pruned from the DTO
    #[serde(default)]
    pub hidden: bool,
}

impl Column {
    /// Whether this column holds a nested object tree.
    pub fn is_object(&self) -> bool {
        self.ty == OBJECT_TYPE
    }
}

impl Schema {
    /// Columns that survive into the DTO.
    pub fn visible_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| !column.hidden)
    }

    /// Structured columns, in declaration order.
    pub fn object_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| column.is_object())
    }
}
