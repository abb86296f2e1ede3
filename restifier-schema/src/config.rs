//! Project configuration loaded from restifier.toml.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{Error, OBJECT_TYPE, Result, error::SourceContext, schema::ParseContext};

/// Root configuration for a restifier project.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub project: ProjectSection,

    /// Custom type mappings layered over the builtin table.
    /// Sorted by token so extension order never depends on file layout.
    #[serde(default)]
    pub types: BTreeMap<String, TypeOverride>,
}

/// The `[project]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    /// Go module path written to go.mod
    pub module: String,

    /// Directory holding one TOML schema per table
    #[serde(default = "default_schema_dir")]
    pub schema_dir: PathBuf,

    /// Directory the Go tree is emitted into
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

/// One `[types.<token>]` entry mapping a schema token to a Go type.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeOverride {
    /// Go type name rendered into declarations
    pub target: String,

    /// Import path the target type requires, if any
    pub import: Option<String>,
}

fn default_schema_dir() -> PathBuf {
    PathBuf::from("tables")
}

fn default_output() -> PathBuf {
    PathBuf::from("generated")
}

impl ProjectConfig {
    /// Parse a restifier.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a restifier.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let config: ProjectConfig =
            toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    /// Schema directory resolved against the directory holding the config file.
    pub fn schema_dir(&self, config_path: &Path) -> PathBuf {
        resolve_against(config_path, &self.project.schema_dir)
    }

    /// Output directory resolved against the directory holding the config file.
    pub fn output_dir(&self, config_path: &Path) -> PathBuf {
        resolve_against(config_path, &self.project.output)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let ctx = ParseContext::new(src, filename);

        if self.project.module.trim().is_empty() {
            return Err(ctx
                .source_context()
                .validation_error("project.module cannot be empty"));
        }

        for (token, mapping) in &self.types {
            if token == OBJECT_TYPE {
                return Err(ctx.source_context().validation_error_at(
                    format!("'{OBJECT_TYPE}' is the structured-column token and cannot be remapped"),
                    ctx.find_span(token),
                ));
            }
            if mapping.target.trim().is_empty() {
                return Err(ctx.source_context().validation_error_at(
                    format!("type '{token}' maps to an empty target"),
                    ctx.find_span(token),
                ));
            }
        }

        Ok(())
    }
}

fn resolve_against(config_path: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match config_path.parent() {
        Some(parent) => parent.join(dir),
        None => dir.to_path_buf(),
    }
}
