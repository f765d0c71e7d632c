//! Template and definition parsers.
//!
//! [`parse_template`] handles a single template string. [`parse_file`]
//! handles a sequence of `name($p) = ...;` definitions and parses each
//! template it contains with [`parse_template`].

mod file;
mod lexeme;
mod template;

pub use file::parse_file;
pub use template::parse_template;
