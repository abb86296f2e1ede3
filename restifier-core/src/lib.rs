//! Core utilities for the restifier generator.
//!
//! This crate provides file persistence rules and the string utilities
//! shared across the restifier crates.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{to_pascal_case, to_snake_case};
