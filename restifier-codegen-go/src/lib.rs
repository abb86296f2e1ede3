//! Emits a Go REST scaffold from parsed table schemas.
//!
//! The entry point is [`Generator`], which renders one model and one DTO
//! source file per table plus the flat project scaffolding (`go.mod`,
//! `main.go` and a repository stub per table). Nested object columns become
//! standalone struct declarations through the traversal policies in
//! [`emit`](ModelEmitter) and [`scan`](ImportScanner).

pub mod files;

mod emit;
mod generator;
mod go_file;
mod naming;
mod scan;
mod types;

pub use emit::{DtoEmitter, ModelEmitter};
pub use generator::{GenerateSummary, Generator, PreviewFile};
pub use go_file::GoFile;
pub use naming::{file_stem, object_type_name, repo_var_name, repository_name, struct_name};
pub use scan::ImportScanner;
pub use types::{builtin_types, project_types};
