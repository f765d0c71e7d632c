//! Token-level parsers shared by the template and definition grammars.

use winnow::combinator::preceded;
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

pub(super) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(super) fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// An identifier: a letter or underscore followed by letters, digits and
/// underscores.
pub(super) fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (one_of(is_ident_start), take_while(0.., is_ident_cont))
        .take()
        .parse_next(input)
}

/// A `$name` parameter reference. Returns the name without the `$`.
pub(super) fn parameter_name(input: &mut &str) -> ModalResult<String> {
    preceded('$', identifier).map(str::to_string).parse_next(input)
}

/// A selector or key part. Unlike identifiers these may start with a digit.
pub(super) fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_ident_cont).parse_next(input)
}

/// A transform context: a word that may contain dots, e.g. `acc.other`.
pub(super) fn dotted_word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| is_ident_cont(c) || c == '.').parse_next(input)
}

/// Optional inline whitespace.
pub(super) fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_whitespace()).void().parse_next(input)
}
