use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Marker recognized by Go tooling; files carrying it are safe to regenerate.
pub const GENERATED_HEADER: &str = "// Code generated by restifier. DO NOT EDIT.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the output directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file body, without the header
    fn render(&self) -> String;

    /// Write the file to disk according to its rules
    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::with_rules(self.path(base), self.render(), self.rules()).write()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be persisted
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::with_rules(path, content, FileRules::default())
    }

    /// Create a new file with explicit rules
    pub fn with_rules(path: impl Into<PathBuf>, content: impl Into<String>, rules: FileRules) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules,
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file body, without the header
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the rules applied when persisting this file
    pub fn rules(&self) -> &FileRules {
        &self.rules
    }

    /// Render the content as written to disk, header included
    pub fn render(&self) -> String {
        match self.rules.header {
            Some(header) => format!("{header}\n\n{}", self.content),
            None => self.content.clone(),
        }
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if self.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&self.path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for machine-owned files: rewritten on every run, marked as generated
    pub fn generated() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: Some(GENERATED_HEADER),
        }
    }

    /// Rules for user-owned stubs: created once, never touched again
    pub fn stub() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (stubs)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}
