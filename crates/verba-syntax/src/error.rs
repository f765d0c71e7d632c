//! Parse and definition errors.

use std::fmt;

use thiserror::Error;

/// A 1-based line and column in a template or definition source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };

    /// Computes the position of byte `offset` within `source`.
    pub fn at(source: &str, offset: usize) -> Position {
        let offset = offset.min(source.len());
        let consumed = &source[..offset];
        let line = consumed.matches('\n').count() + 1;
        let column = match consumed.rfind('\n') {
            Some(newline) => consumed[newline + 1..].chars().count() + 1,
            None => consumed.chars().count() + 1,
        };
        Position { line, column }
    }

    /// The byte offset of this position within `source`, the inverse of
    /// [`Position::at`]. Positions past the end clamp to `source.len()`.
    pub fn offset_in(self, source: &str) -> usize {
        let line_start = source
            .split_inclusive('\n')
            .take(self.line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>();
        let rest = &source[line_start..];
        let column = rest
            .char_indices()
            .take_while(|(_, c)| *c != '\n')
            .nth(self.column.saturating_sub(1))
            .map_or_else(|| rest.find('\n').unwrap_or(rest.len()), |(i, _)| i);
        line_start + column
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An error produced while parsing a template or a definition source.
///
/// Every variant is fatal for the template being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated interpolation at {position}: missing '}}'")]
    UnterminatedInterpolation { position: Position },

    #[error("unterminated escape at {position}: '{{{{' without matching '}}}}'")]
    UnterminatedEscape { position: Position },

    /// A phrase call used as an argument, or a second transform.
    #[error("illegal nested call to '{name}' at {position}")]
    IllegalNestedCall { name: String, position: Position },

    /// An argument that is not a parameter, number, string or term.
    #[error("illegal argument '{argument}' at {position}: arguments must be simple")]
    IllegalComplexArgument { argument: String, position: Position },

    #[error("unknown directive ':{directive}' at {position}")]
    UnknownDirective { directive: String, position: Position },

    #[error("syntax error at {position}: {message}")]
    Syntax { message: String, position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnterminatedInterpolation { position }
            | ParseError::UnterminatedEscape { position }
            | ParseError::IllegalNestedCall { position, .. }
            | ParseError::IllegalComplexArgument { position, .. }
            | ParseError::UnknownDirective { position, .. }
            | ParseError::Syntax { position, .. } => *position,
        }
    }

    /// The same error reported at `to`.
    pub fn relocated(mut self, to: Position) -> ParseError {
        let position = match &mut self {
            ParseError::UnterminatedInterpolation { position }
            | ParseError::UnterminatedEscape { position }
            | ParseError::IllegalNestedCall { position, .. }
            | ParseError::IllegalComplexArgument { position, .. }
            | ParseError::UnknownDirective { position, .. }
            | ParseError::Syntax { position, .. } => position,
        };
        *position = to;
        self
    }

    pub(crate) fn syntax(message: impl Into<String>, position: Position) -> ParseError {
        ParseError::Syntax { message: message.into(), position }
    }
}

/// A semantic error in a set of otherwise well-formed definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("phrase '{name}' is defined more than once")]
    DuplicatePhrase { name: String },

    #[error("phrase '{phrase}' uses undeclared parameter '${parameter}'")]
    UnknownParameter { phrase: String, parameter: String },

    #[error(
        "phrase '{phrase}' references unknown phrase '{reference}'{}",
        did_you_mean(suggestions)
    )]
    UnknownPhrase {
        phrase: String,
        reference: String,
        suggestions: Vec<String>,
    },

    #[error("phrase '{phrase}' calls '{callee}' with {got} argument(s), expected {expected}")]
    ArgumentCount {
        phrase: String,
        callee: String,
        expected: usize,
        got: usize,
    },

    #[error("phrase '{phrase}' has a variant block without an 'other' entry")]
    MissingOtherVariant { phrase: String },

    #[error("phrase '{phrase}' marks more than one default variant with '*'")]
    MultipleDefaults { phrase: String },

    #[error("phrase '{phrase}' uses :match but has no block of arms")]
    MatchWithoutArms { phrase: String },

    #[error("phrase '{phrase}' has arm '{key}' with {got} part(s), expected {expected}")]
    MatchArity {
        phrase: String,
        key: String,
        expected: usize,
        got: usize,
    },

    #[error("phrase '{phrase}' uses wildcard key '{key}' outside of :match")]
    WildcardOutsideMatch { phrase: String, key: String },

    #[error("phrase '{phrase}' uses unknown transform '@{transform}'{}", did_you_mean(suggestions))]
    UnknownTransform {
        phrase: String,
        transform: String,
        suggestions: Vec<String>,
    },

    #[error("cyclic reference: {}", chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },
}

impl DefinitionError {
    /// The definition the error was reported against.
    pub fn phrase(&self) -> &str {
        match self {
            DefinitionError::DuplicatePhrase { name } => name,
            DefinitionError::UnknownParameter { phrase, .. }
            | DefinitionError::UnknownPhrase { phrase, .. }
            | DefinitionError::ArgumentCount { phrase, .. }
            | DefinitionError::MissingOtherVariant { phrase }
            | DefinitionError::MultipleDefaults { phrase }
            | DefinitionError::MatchWithoutArms { phrase }
            | DefinitionError::MatchArity { phrase, .. }
            | DefinitionError::WildcardOutsideMatch { phrase, .. }
            | DefinitionError::UnknownTransform { phrase, .. } => phrase,
            DefinitionError::CyclicReference { chain } => {
                chain.first().map_or("", String::as_str)
            }
        }
    }
}

fn did_you_mean(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!(", did you mean '{only}'?"),
        many => format!(", did you mean one of: {}?", many.join(", ")),
    }
}
