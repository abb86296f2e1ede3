//! The Go type table.

use restifier_codegen::{TargetType, TypeTable};
use restifier_schema::ProjectConfig;

/// The builtin column-token mapping for Go targets.
///
/// Time-valued tokens resolve to `time.Time` and carry the `time` import;
/// everything else maps to an importless builtin.
pub fn builtin_types() -> TypeTable {
    let mut table = TypeTable::new();
    table.insert("int", TargetType::new("int"));
    table.insert("bigint", TargetType::new("int64"));
    table.insert("smallint", TargetType::new("int32"));
    table.insert("float", TargetType::new("float64"));
    table.insert("double", TargetType::new("float64"));
    table.insert("string", TargetType::new("string"));
    table.insert("text", TargetType::new("string"));
    table.insert("bool", TargetType::new("bool"));
    table.insert("boolean", TargetType::new("bool"));
    table.insert("timestamp", TargetType::with_import("time.Time", "time"));
    table.insert("datetime", TargetType::with_import("time.Time", "time"));
    table.insert("date", TargetType::with_import("time.Time", "time"));
    table.insert("bytes", TargetType::new("[]byte"));
    table
}

/// The builtin mapping extended with the `[types]` overrides from the
/// project configuration. An override for a builtin token replaces it.
pub fn project_types(config: &ProjectConfig) -> TypeTable {
    let mut table = builtin_types();
    for (token, mapping) in &config.types {
        let target = match &mapping.import {
            Some(import) => TargetType::with_import(&mapping.target, import),
            None => TargetType::new(&mapping.target),
        };
        table.insert(token, target);
    }
    table
}

#[cfg(test)]
mod tests {
    use restifier_codegen::Resolution;
    use restifier_schema::{OBJECT_TYPE, ProjectConfig};

    use super::*;

    #[test]
    fn builtin_table_covers_time_tokens() {
        let table = builtin_types();
        for token in ["timestamp", "datetime", "date"] {
            let resolution = table.resolve(token, "test").unwrap();
            assert_eq!(
                resolution,
                Resolution::Scalar(TargetType::with_import("time.Time", "time"))
            );
        }
    }

    #[test]
    fn builtin_table_has_no_structured_entry() {
        // the sentinel resolves through the short-circuit, never through a
        // stored mapping
        let table = builtin_types();
        for token in table.tokens() {
            assert_ne!(token, OBJECT_TYPE);
            assert!(matches!(
                table.resolve(token, "test").unwrap(),
                Resolution::Scalar(_)
            ));
        }
    }

    #[test]
    fn overrides_extend_and_replace() {
        let config = ProjectConfig::from_str_with_filename(
            r#"
            [project]
            module = "example.com/api"

            [types.uuid]
            target = "uuid.UUID"
            import = "github.com/google/uuid"

            [types.int]
            target = "int64"
            "#,
            "restifier.toml",
        )
        .unwrap();

        let table = project_types(&config);
        assert_eq!(
            table.resolve("uuid", "test").unwrap(),
            Resolution::Scalar(TargetType::with_import("uuid.UUID", "github.com/google/uuid"))
        );
        assert_eq!(
            table.resolve("int", "test").unwrap(),
            Resolution::Scalar(TargetType::new("int64"))
        );
        // untouched builtins survive
        assert_eq!(
            table.resolve("bool", "test").unwrap(),
            Resolution::Scalar(TargetType::new("bool"))
        );
    }
}
