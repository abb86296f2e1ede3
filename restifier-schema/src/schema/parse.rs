//! Schema parsing from files and strings.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    str::FromStr,
};

use super::{Node, Schema, validate::ParseContext};
use crate::{Error, OBJECT_TYPE, Result, error::SourceContext};

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "schema.toml")
    }
}

impl Schema {
    /// Parse a table schema from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_schema(&content, &path.display().to_string())
    }
}

/// Parse a table schema from content with the given filename for error reporting.
pub fn parse_schema(content: &str, filename: &str) -> Result<Schema> {
    let source_ctx = SourceContext::new(content, filename);
    let mut schema: Schema = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_schema(&schema, content, filename)?;
    normalize_schema(&mut schema);
    Ok(schema)
}

/// Load every `*.toml` schema under `dir`.
///
/// Files are read in file-name order so a run always processes tables in the
/// same sequence.
pub fn load_schema_dir(dir: impl AsRef<Path>) -> Result<Vec<Schema>> {
    let dir = dir.as_ref();
    let io_error = |source| {
        Box::new(Error::Io {
            path: dir.to_path_buf(),
            source,
        })
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| io_error(e))? {
        let path = entry.map_err(|e| io_error(e))?.path();
        if path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(Schema::from_file).collect()
}

/// Validate the schema after parsing.
fn validate_schema(schema: &Schema, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.validate_name(&schema.name, "table")?;

    let mut seen = HashSet::new();
    for column in &schema.columns {
        ctx.validate_name(&column.name, "column")?;
        if !seen.insert(column.name.as_str()) {
            return Err(ctx.source_context().duplicate_name_error(
                &column.name,
                "column",
                ctx.find_span(&column.name),
            ));
        }

        if column.is_object() && column.object.is_none() {
            return Err(ctx.source_context().validation_error_at(
                format!(
                    "column '{}' has type \"{OBJECT_TYPE}\" but no [columns.object] table",
                    column.name
                ),
                ctx.find_span(&column.name),
            ));
        }
        if !column.is_object() && column.object.is_some() {
            return Err(ctx.source_context().validation_error_at(
                format!(
                    "column '{}' declares an object but its type is '{}', not \"{OBJECT_TYPE}\"",
                    column.name, column.ty
                ),
                ctx.find_span(&column.name),
            ));
        }

        if let Some(root) = &column.object {
            if !root.name.is_empty() && root.name != column.name {
                return Err(ctx.source_context().validation_error_at(
                    format!(
                        "the root object of column '{}' takes the column's name; remove 'name = \"{}\"'",
                        column.name, root.name
                    ),
                    ctx.find_span(&root.name),
                ));
            }
            if root.hidden {
                return Err(ctx.source_context().validation_error_at(
                    format!(
                        "the root object of column '{}' cannot be hidden; hide the column instead",
                        column.name
                    ),
                    ctx.find_span(&column.name),
                ));
            }

            validate_node(root, &ctx.push(&column.name))?;
        }
    }

    Ok(())
}

/// Validate one node's members and recurse into its children.
///
/// Fields and child references land in the same generated struct, so their
/// names share one namespace.
fn validate_node(node: &Node, ctx: &ParseContext) -> Result<()> {
    let mut seen = HashSet::new();

    for field in &node.fields {
        ctx.validate_name(&field.name, "field")?;
        if !seen.insert(field.name.as_str()) {
            return Err(ctx.source_context().duplicate_name_error(
                &field.name,
                "field",
                ctx.find_span(&field.name),
            ));
        }
    }

    for child in &node.children {
        ctx.validate_name(&child.name, "object")?;
        if !seen.insert(child.name.as_str()) {
            return Err(ctx.source_context().duplicate_name_error(
                &child.name,
                "object",
                ctx.find_span(&child.name),
            ));
        }
        validate_node(child, &ctx.push(&child.name))?;
    }

    Ok(())
}

/// Fill in the derived parts of the tree: each root object takes its
/// column's name.
fn normalize_schema(schema: &mut Schema) {
    for column in &mut schema.columns {
        if let Some(root) = &mut column.object {
            root.name.clone_from(&column.name);
        }
    }
}
