//! Grammar shared by the verba runtime and the `verba!` macro.
//!
//! This crate owns everything that can be decided without a running locale:
//! the template AST, the template and definition parsers, static validation
//! of a set of definitions, and the tables of built-in transform names per
//! language. Keeping these in one place means the compile-time checks and the
//! runtime loader can never disagree about what a definition means.

pub mod ast;
pub mod error;
pub mod parser;
mod suggest;
pub mod transforms;
mod validate;

pub use ast::*;
pub use error::{DefinitionError, ParseError, Position};
pub use parser::{parse_file, parse_template};
pub use suggest::compute_suggestions;
pub use transforms::{TransformId, accepted_transform_names, resolve_transform};
pub use validate::validate;
