//! AST for templates and phrase definitions.
//!
//! The AST is public so the runtime, the macro and external tooling all work
//! from the same shapes.

use std::fmt;

use crate::error::Position;

/// A parsed template: literal text interleaved with interpolations.
///
/// Adjacent literal segments are always merged by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Creates a template consisting of a single literal.
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self { segments: vec![Segment::Literal(text)] }
    }

    /// Iterates over the interpolations in order of appearance.
    pub fn interpolations(&self) -> impl Iterator<Item = &Interpolation> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Interpolation(interpolation) => Some(interpolation),
            Segment::Literal(_) => None,
        })
    }

    /// Returns the text if the template has no interpolations.
    pub fn as_literal(&self) -> Option<String> {
        let mut text = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => text.push_str(literal),
                Segment::Interpolation(_) => return None,
            }
        }
        Some(text)
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, including text produced by `{{...}}` escapes.
    Literal(String),
    /// An interpolation: `{@transform reference:selector}`.
    Interpolation(Interpolation),
}

/// A single `{...}` interpolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolation {
    /// At most one transform applies to an interpolation.
    pub transform: Option<TransformCall>,
    pub reference: Reference,
    pub selectors: Vec<Selector>,
}

/// A transform applied to a reference, e.g. `@cap` or `@der:acc.other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformCall {
    /// Transform name without `@`.
    pub name: String,
    pub context: Option<Selector>,
}

/// What an interpolation refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// `$name`
    Parameter(String),
    /// A parameterless phrase: `card`
    Term(String),
    /// A phrase call: `subtype($s)`
    Call { name: String, args: Vec<Argument> },
}

impl Reference {
    /// The phrase this reference names, if it names one.
    pub fn phrase_name(&self) -> Option<&str> {
        match self {
            Reference::Parameter(_) => None,
            Reference::Term(name) | Reference::Call { name, .. } => Some(name),
        }
    }
}

/// An argument to a phrase call. Arguments are never themselves calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Parameter(String),
    Number(i64),
    Text(String),
    Term(String),
}

/// A variant selector or transform context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A literal key such as `one`, `acc` or `acc.other`.
    Literal(String),
    /// `$name`, resolved at render time.
    Parameter(String),
}

/// A named, parameterized phrase definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseDefinition {
    pub name: String,
    /// Parameter names without the `$` prefix.
    pub parameters: Vec<String>,
    /// Tags declared directly on the definition, in declaration order.
    pub tags: Vec<String>,
    /// Parameter named by `:from($p)`.
    pub from_param: Option<String>,
    /// Parameters named by `:match($a, ...)`. Empty when there is no match.
    pub match_params: Vec<String>,
    pub body: PhraseBody,
    /// True for the body-less `:from($p);` form, whose body is `"{$p}"`.
    pub bodyless: bool,
    /// Where the definition starts in its source.
    pub position: Position,
}

impl PhraseDefinition {
    /// Every template in the body, in declaration order.
    pub fn templates(&self) -> Vec<&Template> {
        match &self.body {
            PhraseBody::Template(template) => vec![template],
            PhraseBody::Variants(entries) => entries.iter().map(|e| &e.template).collect(),
        }
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// The right-hand side of a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseBody {
    Template(Template),
    /// A block of `key, key: "template"` entries.
    Variants(Vec<VariantEntry>),
}

/// One entry of a variant block. Several keys may share a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantEntry {
    pub keys: Vec<EntryKey>,
    pub template: Template,
}

/// A dot-separated key such as `nom.one`, `*other` or `*.fem`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryKey {
    pub parts: Vec<KeyPart>,
}

/// One dot-separated part of an [`EntryKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPart {
    Literal(String),
    /// `*` or `*name`.
    Wildcard(Option<String>),
}

impl KeyPart {
    /// The concrete name of the part. A labelled wildcard `*name` counts as
    /// `name`.
    pub fn label(&self) -> Option<&str> {
        match self {
            KeyPart::Literal(name) | KeyPart::Wildcard(Some(name)) => Some(name),
            KeyPart::Wildcard(None) => None,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, KeyPart::Wildcard(_))
    }
}

impl EntryKey {
    /// The variant key this entry stores under, with `*` markers removed.
    pub fn variant_key(&self) -> String {
        self.parts.iter().filter_map(KeyPart::label).collect::<Vec<_>>().join(".")
    }

    /// True for the `*key` default marker of a plain variant block.
    pub fn is_default_marker(&self) -> bool {
        matches!(self.parts.first(), Some(KeyPart::Wildcard(Some(_))))
    }

    pub fn has_wildcard(&self) -> bool {
        self.parts.iter().any(KeyPart::is_wildcard)
    }

    /// True when every part is a wildcard (`*`, `*other`, `*.*`).
    pub fn is_catch_all(&self) -> bool {
        self.parts.iter().all(KeyPart::is_wildcard)
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            match part {
                KeyPart::Literal(name) => write!(f, "{name}")?,
                KeyPart::Wildcard(Some(name)) => write!(f, "*{name}")?,
                KeyPart::Wildcard(None) => write!(f, "*")?,
            }
        }
        Ok(())
    }
}
