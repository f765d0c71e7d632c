//! Template string parser.
//!
//! The top level is scanned by hand so that `{{...}}` escape spans are
//! recognized before anything else and so that every failure can be reported
//! with its exact position. The inside of each `{...}` interpolation is
//! parsed with winnow.

use winnow::combinator::{alt, delimited, opt, preceded};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

use super::lexeme::{dotted_word, identifier, parameter_name, word, ws};
use crate::ast::{Argument, Interpolation, Reference, Segment, Selector, Template, TransformCall};
use crate::error::{ParseError, Position};

/// Parses a template string into a [`Template`].
///
/// `{{text}}` renders as `{text}` with its contents taken literally, a lone
/// `}}` renders as `}`, and `{...}` is an interpolation.
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut segments = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        let offset = input.len() - rest.len();
        if let Some(after) = rest.strip_prefix("{{") {
            let Some(end) = after.find("}}") else {
                return Err(ParseError::UnterminatedEscape {
                    position: Position::at(input, offset),
                });
            };
            push_literal(&mut segments, "{");
            push_literal(&mut segments, &after[..end]);
            push_literal(&mut segments, "}");
            rest = &after[end + 2..];
        } else if let Some(after) = rest.strip_prefix("}}") {
            push_literal(&mut segments, "}");
            rest = after;
        } else if let Some(after) = rest.strip_prefix('{') {
            let Some(end) = closing_brace(after) else {
                return Err(ParseError::UnterminatedInterpolation {
                    position: Position::at(input, offset),
                });
            };
            let body =
                InterpolationBody { source: input, start: offset + 1, content: &after[..end] };
            segments.push(Segment::Interpolation(body.parse()?));
            rest = &after[end + 1..];
        } else if rest.starts_with('}') {
            return Err(ParseError::syntax("unmatched '}'", Position::at(input, offset)));
        } else {
            let end = rest.find(['{', '}']).unwrap_or(rest.len());
            push_literal(&mut segments, &rest[..end]);
            rest = &rest[end..];
        }
    }

    Ok(Template { segments })
}

fn push_literal(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Literal(last)) = segments.last_mut() {
        last.push_str(text);
    } else {
        segments.push(Segment::Literal(text.to_string()));
    }
}

/// Finds the `}` closing an interpolation. Braces inside quoted arguments do
/// not count.
fn closing_brace(text: &str) -> Option<usize> {
    let mut quoted = false;
    for (i, c) in text.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '}' if !quoted => return Some(i),
            _ => {}
        }
    }
    None
}

/// The text between `{` and `}`, with enough context to report positions in
/// the enclosing template.
struct InterpolationBody<'a> {
    source: &'a str,
    start: usize,
    content: &'a str,
}

impl InterpolationBody<'_> {
    fn position(&self, rest: &str) -> Position {
        Position::at(self.source, self.start + self.content.len() - rest.len())
    }

    fn parse(&self) -> Result<Interpolation, ParseError> {
        let mut rest = self.content;
        skip_ws(&mut rest);

        if let Some(after) = rest.strip_prefix(':') {
            let mut lookahead = after;
            let directive = identifier(&mut lookahead).unwrap_or_default();
            return Err(ParseError::UnknownDirective {
                directive: directive.to_string(),
                position: self.position(rest),
            });
        }

        let mut transform = None;
        if rest.starts_with('@') {
            let start = rest;
            let call = transform_call(&mut rest).map_err(|_| {
                ParseError::syntax("expected a transform name after '@'", self.position(start))
            })?;
            skip_ws(&mut rest);
            if let Some(after) = rest.strip_prefix('@') {
                let mut lookahead = after;
                let name = identifier(&mut lookahead).unwrap_or_default();
                return Err(ParseError::IllegalNestedCall {
                    name: format!("@{name}"),
                    position: self.position(rest),
                });
            }
            transform = Some(call);
        }

        let start = rest;
        let (reference, auto_cap) = self.reference(&mut rest)?;
        if auto_cap {
            if transform.is_some() {
                return Err(ParseError::IllegalNestedCall {
                    name: "@cap".to_string(),
                    position: self.position(start),
                });
            }
            transform = Some(TransformCall { name: "cap".to_string(), context: None });
        }

        let mut selectors = Vec::new();
        while rest.starts_with(':') {
            let start = rest;
            let parsed = selector(&mut rest).map_err(|_| {
                ParseError::syntax("expected a selector after ':'", self.position(start))
            })?;
            selectors.push(parsed);
        }

        skip_ws(&mut rest);
        if let Some(c) = rest.chars().next() {
            return Err(ParseError::syntax(
                format!("unexpected '{c}' in interpolation"),
                self.position(rest),
            ));
        }

        Ok(Interpolation { transform, reference, selectors })
    }

    /// Parses the reference and reports whether it was written with an
    /// uppercase initial.
    fn reference(&self, rest: &mut &str) -> Result<(Reference, bool), ParseError> {
        let start = *rest;
        if start.starts_with('$') {
            let name = parameter_name(rest).map_err(|_| {
                ParseError::syntax("expected a parameter name after '$'", self.position(start))
            })?;
            return Ok((Reference::Parameter(name), false));
        }

        let Ok(written) = identifier(rest) else {
            return Err(ParseError::syntax(
                "expected a parameter or phrase name",
                self.position(start),
            ));
        };
        let auto_cap = written.starts_with(|c: char| c.is_ascii_uppercase());
        let name = if auto_cap { lowercase_first(written) } else { written.to_string() };

        if let Some(after) = rest.strip_prefix('(') {
            *rest = after;
            let args = self.arguments(rest, &name)?;
            return Ok((Reference::Call { name, args }, auto_cap));
        }
        Ok((Reference::Term(name), auto_cap))
    }

    /// Parses call arguments after the opening parenthesis, consuming the
    /// closing one.
    fn arguments(&self, rest: &mut &str, callee: &str) -> Result<Vec<Argument>, ParseError> {
        let mut args = Vec::new();
        skip_ws(rest);
        if let Some(after) = rest.strip_prefix(')') {
            *rest = after;
            return Ok(args);
        }

        loop {
            skip_ws(rest);
            let start = *rest;
            if start.starts_with(['@', '{']) {
                return Err(ParseError::IllegalComplexArgument {
                    argument: argument_text(start),
                    position: self.position(start),
                });
            }
            let parsed = argument(rest).map_err(|_| {
                ParseError::syntax(
                    format!("malformed argument in call to '{callee}'"),
                    self.position(start),
                )
            })?;
            if rest.starts_with('(') {
                return Err(match parsed {
                    Argument::Term(name) => {
                        ParseError::IllegalNestedCall { name, position: self.position(start) }
                    }
                    _ => ParseError::syntax(
                        format!("malformed argument in call to '{callee}'"),
                        self.position(rest),
                    ),
                });
            }
            if rest.starts_with(':') {
                return Err(ParseError::IllegalComplexArgument {
                    argument: argument_text(start),
                    position: self.position(start),
                });
            }
            args.push(parsed);

            skip_ws(rest);
            match rest.chars().next() {
                Some(',') => *rest = &rest[1..],
                Some(')') => {
                    *rest = &rest[1..];
                    return Ok(args);
                }
                _ => {
                    return Err(ParseError::syntax(
                        format!("expected ',' or ')' in call to '{callee}'"),
                        self.position(rest),
                    ));
                }
            }
        }
    }
}

fn skip_ws(input: &mut &str) {
    let _ = ws(input);
}

fn lowercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut lowered = first.to_ascii_lowercase().to_string();
            lowered.push_str(chars.as_str());
            lowered
        }
        None => String::new(),
    }
}

/// The source text of an argument, for error messages.
fn argument_text(start: &str) -> String {
    start.split([',', ')']).next().unwrap_or(start).trim().to_string()
}

/// `@name` or `@name:context`.
fn transform_call(input: &mut &str) -> ModalResult<TransformCall> {
    preceded('@', (identifier, opt(preceded(':', context))))
        .map(|(name, context)| TransformCall { name: name.to_string(), context })
        .parse_next(input)
}

fn context(input: &mut &str) -> ModalResult<Selector> {
    alt((
        parameter_name.map(Selector::Parameter),
        dotted_word.map(|s: &str| Selector::Literal(s.to_string())),
    ))
    .parse_next(input)
}

fn selector(input: &mut &str) -> ModalResult<Selector> {
    preceded(
        ':',
        alt((
            parameter_name.map(Selector::Parameter),
            word.map(|s: &str| Selector::Literal(s.to_string())),
        )),
    )
    .parse_next(input)
}

fn argument(input: &mut &str) -> ModalResult<Argument> {
    alt((
        parameter_name.map(Argument::Parameter),
        number.map(Argument::Number),
        quoted.map(|s: &str| Argument::Text(s.to_string())),
        identifier.map(|s: &str| Argument::Term(s.to_string())),
    ))
    .parse_next(input)
}

fn number(input: &mut &str) -> ModalResult<i64> {
    (opt('-'), take_while(1.., |c: char| c.is_ascii_digit()))
        .take()
        .try_map(str::parse::<i64>)
        .parse_next(input)
}

fn quoted<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('"', take_till(0.., '"'), '"').parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_brace_skips_quoted_text() {
        assert_eq!(closing_brace(r#"f("a}b")} tail"#), Some(8));
        assert_eq!(closing_brace("no close"), None);
    }

    #[test]
    fn argument_text_stops_at_separator() {
        assert_eq!(argument_text("@cap x, y)"), "@cap x");
        assert_eq!(argument_text("{x)"), "{x");
    }
}
