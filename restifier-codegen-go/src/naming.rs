//! Naming rules for emitted Go identifiers and files.

use restifier_core::{to_pascal_case, to_snake_case};

/// Struct name for a table: `invoice` becomes `Invoice`.
pub fn struct_name(table: &str) -> String {
    to_pascal_case(table)
}

/// Declaration name synthesized for a nested object node.
///
/// Prefixing the table name keeps declarations from different tables
/// distinct even when node names collide: `invoice` + `meta` becomes
/// `Invoice_MetaOBJ`.
pub fn object_type_name(table: &str, node: &str) -> String {
    format!("{}_{}OBJ", to_pascal_case(table), to_pascal_case(node))
}

/// Repository type name for a table.
pub fn repository_name(table: &str) -> String {
    format!("{}Repository", to_pascal_case(table))
}

/// Variable name a table's repository binds to in the entry point.
pub fn repo_var_name(table: &str) -> String {
    let pascal = to_pascal_case(table);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => format!("{}{}Repo", first.to_lowercase(), chars.as_str()),
        None => String::from("repo"),
    }
}

/// File stem for a table's emitted artifacts.
pub fn file_stem(table: &str) -> String {
    to_snake_case(table)
}
