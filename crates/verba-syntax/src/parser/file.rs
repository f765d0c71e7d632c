//! Definition source parser.
//!
//! A source is a sequence of definitions:
//!
//! ```text
//! // comment
//! card = { one: "card", other: "cards" };
//! draw($n) = "Draw {$n} {card:$n}.";
//! destroyed($t) = :fem :from($t) "{$t} destroyed";
//! wrapped($t) = :from($t);
//! count($n, $e) = :match($n, $e) { 1.masc: "one", 1.*fem: "one", *other.*: "many" };
//! ```
//!
//! Template strings are unescaped first and parsed afterwards with
//! [`parse_template`], with their error positions mapped back onto the raw
//! source text.

use winnow::combinator::{alt, cut_err, delimited, opt, preceded, repeat, separated, terminated};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_till, take_while};

use super::lexeme::{identifier, parameter_name, word, ws};
use super::template::parse_template;
use crate::ast::{
    EntryKey, Interpolation, KeyPart, PhraseBody, PhraseDefinition, Reference, Segment, Template,
    VariantEntry,
};
use crate::error::{ParseError, Position};

/// Parses a definition source into phrase definitions.
pub fn parse_file(input: &str) -> Result<Vec<PhraseDefinition>, ParseError> {
    let mut remaining = input;
    let raw = match definitions(&mut remaining) {
        Ok(raw) => raw,
        Err(error) => {
            return Err(ParseError::syntax(
                failure_message(&error, remaining),
                Position::at(input, input.len() - remaining.len()),
            ));
        }
    };
    if let Some(c) = remaining.chars().next() {
        return Err(ParseError::syntax(
            format!("unexpected character '{c}'"),
            Position::at(input, input.len() - remaining.len()),
        ));
    }
    raw.into_iter().map(|definition| definition.resolve(input)).collect()
}

fn failure_message(error: &ErrMode<ContextError>, remaining: &str) -> String {
    let detail = match error {
        ErrMode::Backtrack(context) | ErrMode::Cut(context) => {
            context.to_string().replace('\n', ", ")
        }
        ErrMode::Incomplete(_) => String::new(),
    };
    let found = remaining
        .chars()
        .next()
        .map_or_else(|| "end of input".to_string(), |c| format!("'{c}'"));
    if detail.is_empty() {
        format!("unexpected {found}")
    } else {
        format!("{detail}, found {found}")
    }
}

// ============================================================================
// Raw definitions
// ============================================================================

/// Offsets below are remaining-input lengths, converted to positions once the
/// whole source is known.
struct RawDefinition {
    name: String,
    parameters: Vec<String>,
    modifiers: Vec<Modifier>,
    body: RawBody,
    remaining: usize,
}

enum Modifier {
    Tag(String),
    From(String),
    Match(Vec<String>),
    Unknown { name: String, remaining: usize },
}

enum RawBody {
    Template(RawString),
    Variants(Vec<RawEntry>),
    /// No body: `:from($p);` renders the parameter unchanged.
    Inherited,
}

struct RawEntry {
    keys: Vec<EntryKey>,
    template: RawString,
}

struct RawString {
    /// The unescaped content.
    text: String,
    escapes: Vec<Escape>,
    remaining: usize,
}

/// An escape sequence, located by the unescaped offset of the character it
/// produced.
struct Escape {
    at: usize,
    /// Raw bytes beyond the length of the produced character.
    extra: usize,
}

impl RawString {
    fn parse(self, source: &str) -> Result<Template, ParseError> {
        parse_template(&self.text).map_err(|error| {
            let offset = error.position().offset_in(&self.text);
            error.relocated(Position::at(source, self.raw_offset(source, offset)))
        })
    }

    /// Maps an offset in the unescaped text to an offset in `source`.
    fn raw_offset(&self, source: &str, offset: usize) -> usize {
        let content_start = source.len() - self.remaining + 1;
        let extra = self.escapes.iter().filter(|e| e.at < offset).map(|e| e.extra).sum::<usize>();
        content_start + offset + extra
    }
}

impl RawDefinition {
    fn resolve(self, source: &str) -> Result<PhraseDefinition, ParseError> {
        let RawDefinition { name, parameters, modifiers, body, remaining } = self;
        let position = Position::at(source, source.len() - remaining);

        let mut tags: Vec<String> = Vec::new();
        let mut from_param = None;
        let mut match_params = Vec::new();
        for modifier in modifiers {
            match modifier {
                Modifier::Tag(tag) => {
                    if !tags.contains(&tag) {
                        tags.push(tag);
                    }
                }
                Modifier::From(param) => {
                    if from_param.replace(param).is_some() {
                        return Err(ParseError::syntax(
                            format!("phrase '{name}' has more than one :from"),
                            position,
                        ));
                    }
                }
                Modifier::Match(params) => {
                    if !match_params.is_empty() {
                        return Err(ParseError::syntax(
                            format!("phrase '{name}' has more than one :match"),
                            position,
                        ));
                    }
                    match_params = params;
                }
                Modifier::Unknown { name: directive, remaining } => {
                    return Err(ParseError::UnknownDirective {
                        directive,
                        position: Position::at(source, source.len() - remaining),
                    });
                }
            }
        }

        let bodyless = matches!(body, RawBody::Inherited);
        let body = match body {
            RawBody::Template(raw) => PhraseBody::Template(raw.parse(source)?),
            RawBody::Variants(entries) => PhraseBody::Variants(
                entries
                    .into_iter()
                    .map(|entry| {
                        let template = entry.template.parse(source)?;
                        Ok(VariantEntry { keys: entry.keys, template })
                    })
                    .collect::<Result<_, ParseError>>()?,
            ),
            RawBody::Inherited => {
                let Some(param) = &from_param else {
                    return Err(ParseError::syntax(
                        format!("phrase '{name}' has no body and no :from"),
                        position,
                    ));
                };
                PhraseBody::Template(Template {
                    segments: vec![Segment::Interpolation(Interpolation {
                        transform: None,
                        reference: Reference::Parameter(param.clone()),
                        selectors: Vec::new(),
                    })],
                })
            }
        };

        Ok(PhraseDefinition {
            name,
            parameters,
            tags,
            from_param,
            match_params,
            body,
            bodyless,
            position,
        })
    }
}

// ============================================================================
// Grammar
// ============================================================================

fn expected(c: char) -> StrContext {
    StrContext::Expected(StrContextValue::CharLiteral(c))
}

fn definitions(input: &mut &str) -> ModalResult<Vec<RawDefinition>> {
    skip_ws_and_comments(input)?;
    repeat(0.., terminated(definition, skip_ws_and_comments)).parse_next(input)
}

fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    repeat(0.., alt((take_while(1.., char::is_whitespace).void(), line_comment))).parse_next(input)
}

fn line_comment(input: &mut &str) -> ModalResult<()> {
    preceded("//", take_till(0.., '\n')).void().parse_next(input)
}

/// `name($a, $b) = modifiers body;`
fn definition(input: &mut &str) -> ModalResult<RawDefinition> {
    let remaining = input.len();
    let name = identifier
        .verify(|s: &str| s.starts_with(|c: char| c.is_ascii_lowercase()))
        .parse_next(input)?;
    skip_ws_and_comments(input)?;

    let parameters = opt(parameter_list).parse_next(input)?.unwrap_or_default();
    skip_ws_and_comments(input)?;
    cut_err('='.context(expected('='))).parse_next(input)?;
    skip_ws_and_comments(input)?;

    let modifiers: Vec<Modifier> =
        repeat(0.., terminated(modifier, skip_ws_and_comments)).parse_next(input)?;

    let body = if input.starts_with(';') {
        RawBody::Inherited
    } else {
        cut_err(
            alt((variant_block.map(RawBody::Variants), raw_string.map(RawBody::Template)))
                .context(StrContext::Label("phrase body"))
                .context(expected('"'))
                .context(expected('{')),
        )
        .parse_next(input)?
    };
    skip_ws_and_comments(input)?;
    cut_err(';'.context(expected(';'))).parse_next(input)?;

    Ok(RawDefinition { name: name.to_string(), parameters, modifiers, body, remaining })
}

fn parameter_list(input: &mut &str) -> ModalResult<Vec<String>> {
    delimited(
        '(',
        separated(
            0..,
            preceded(skip_ws_and_comments, parameter_name),
            (skip_ws_and_comments, ','),
        ),
        preceded(skip_ws_and_comments, cut_err(')'.context(expected(')')))),
    )
    .parse_next(input)
}

/// `:tag`, `:from($p)`, `:match($a, $b)`, or an unknown `:name(...)`.
fn modifier(input: &mut &str) -> ModalResult<Modifier> {
    let remaining = input.len();
    let name = preceded(':', identifier).parse_next(input)?;
    match name {
        "from" => cut_err(delimited(('(', ws), parameter_name, (ws, ')')))
            .context(StrContext::Label(":from"))
            .map(Modifier::From)
            .parse_next(input),
        "match" => cut_err(delimited(
            ('(', ws),
            separated(1.., parameter_name, (ws, ',', ws)),
            (ws, ')'),
        ))
        .context(StrContext::Label(":match"))
        .map(Modifier::Match)
        .parse_next(input),
        _ if input.starts_with('(') => {
            delimited('(', take_till(0.., ')'), ')').void().parse_next(input)?;
            Ok(Modifier::Unknown { name: name.to_string(), remaining })
        }
        _ => Ok(Modifier::Tag(name.to_string())),
    }
}

/// `{ key, key: "template", ... }` with an optional trailing comma.
fn variant_block(input: &mut &str) -> ModalResult<Vec<RawEntry>> {
    '{'.parse_next(input)?;
    cut_err(terminated(variant_entries, (skip_ws_and_comments, '}'.context(expected('}')))))
        .parse_next(input)
}

fn variant_entries(input: &mut &str) -> ModalResult<Vec<RawEntry>> {
    skip_ws_and_comments(input)?;
    let entries: Vec<RawEntry> = separated(
        1..,
        variant_entry,
        (skip_ws_and_comments, ',', skip_ws_and_comments),
    )
    .parse_next(input)?;
    opt((skip_ws_and_comments, ',')).void().parse_next(input)?;
    Ok(entries)
}

fn variant_entry(input: &mut &str) -> ModalResult<RawEntry> {
    let keys = separated(1.., entry_key, (skip_ws_and_comments, ',', skip_ws_and_comments))
        .parse_next(input)?;
    skip_ws_and_comments(input)?;
    ':'.context(expected(':')).parse_next(input)?;
    skip_ws_and_comments(input)?;
    let template = raw_string(input)?;
    Ok(RawEntry { keys, template })
}

/// `nom.one`, `*other`, `*.fem`.
fn entry_key(input: &mut &str) -> ModalResult<EntryKey> {
    separated(1.., key_part, '.').map(|parts| EntryKey { parts }).parse_next(input)
}

fn key_part(input: &mut &str) -> ModalResult<KeyPart> {
    alt((
        preceded('*', opt(word))
            .map(|label: Option<&str>| KeyPart::Wildcard(label.map(str::to_string))),
        word.map(|w: &str| KeyPart::Literal(w.to_string())),
    ))
    .parse_next(input)
}

/// A double-quoted string supporting `\"`, `\\`, `\n`, `\t` and `\u{XXXX}`.
fn raw_string(input: &mut &str) -> ModalResult<RawString> {
    let remaining = input.len();
    '"'.parse_next(input)?;
    let mut text = String::new();
    let mut escapes = Vec::new();
    loop {
        let chunk = cut_err(take_till(0.., ['"', '\\'])).parse_next(input)?;
        text.push_str(chunk);
        let before = input.len();
        match cut_err(any.context(expected('"'))).parse_next(input)? {
            '"' => return Ok(RawString { text, escapes, remaining }),
            _ => {
                let c = cut_err(escape.context(StrContext::Label("escape sequence")))
                    .parse_next(input)?;
                let extra = before - input.len() - c.len_utf8();
                escapes.push(Escape { at: text.len(), extra });
                text.push(c);
            }
        }
    }
}

fn escape(input: &mut &str) -> ModalResult<char> {
    alt((
        'n'.value('\n'),
        't'.value('\t'),
        '"'.value('"'),
        '\\'.value('\\'),
        unicode_escape,
    ))
    .parse_next(input)
}

fn unicode_escape(input: &mut &str) -> ModalResult<char> {
    delimited("u{", take_while(1..=6, |c: char| c.is_ascii_hexdigit()), '}')
        .verify_map(|hex: &str| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32))
        .parse_next(input)
}
