//! Language-agnostic core of the restifier emission engine.
//!
//! This crate holds the pieces that do not know anything about the target
//! language: the type-token resolver, the recursive traversal over nested
//! object trees, and import collection. Target backends supply emission
//! policies and the builtin type table.

mod error;
mod imports;
mod resolve;
mod walk;

pub use error::{Error, Result};
pub use imports::ImportSet;
pub use resolve::{Resolution, TargetType, TypeTable};
pub use walk::{Accumulate, EmissionPolicy, Mode, NodeStep, traverse};
