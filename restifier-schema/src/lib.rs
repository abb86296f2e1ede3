// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod schema;

pub use config::{ProjectConfig, ProjectSection, TypeOverride};
pub use error::{Error, Result, SourceContext};
pub use schema::{
    Column, Field, Node, OBJECT_TYPE, ParseContext, Schema, load_schema_dir, parse_schema,
};
