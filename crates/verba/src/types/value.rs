use std::fmt::{Display, Formatter, Result as FmtResult};

use super::{Phrase, TagSet};

/// A runtime argument to a phrase.
///
/// ```
/// use verba::{Phrase, Value};
///
/// let count: Value = 3.into();
/// let name: Value = "Alice".into();
/// let card: Value = Phrase::from("card").into();
///
/// assert_eq!(count.as_number(), Some(3));
/// assert_eq!(name.to_string(), "Alice");
/// assert!(card.as_phrase().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An integer, used for plural selection.
    Number(i64),
    Text(String),
    /// A phrase, carrying its variants and tags.
    Phrase(Phrase),
}

impl Value {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) | Value::Phrase(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) | Value::Phrase(_) => None,
        }
    }

    pub fn as_phrase(&self) -> Option<&Phrase> {
        match self {
            Value::Phrase(p) => Some(p),
            Value::Number(_) | Value::Text(_) => None,
        }
    }

    /// The value as an integer: a number, or text that parses as one.
    pub fn numeric(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse().ok(),
            Value::Phrase(_) => None,
        }
    }

    /// The tags of a phrase value. Other values have none.
    pub fn tags(&self) -> TagSet {
        match self {
            Value::Phrase(p) => p.tags().clone(),
            Value::Number(_) | Value::Text(_) => TagSet::new(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.as_phrase().is_some_and(|p| p.has_tag(tag))
    }

    /// The text of variant `key` for phrases, or the display text otherwise.
    pub fn variant_text(&self, key: &str) -> String {
        match self {
            Value::Phrase(p) => p.variant(key).to_string(),
            Value::Number(_) | Value::Text(_) => self.to_string(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Phrase(p) => write!(f, "{p}"),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

/// Counts beyond `i64::MAX` are kept as text rather than clamped.
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or_else(|_| Value::Text(n.to_string()), Value::Number)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or_else(|_| Value::Text(n.to_string()), Value::Number)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<Phrase> for Value {
    fn from(p: Phrase) -> Self {
        Value::Phrase(p)
    }
}

impl From<&Phrase> for Value {
    fn from(p: &Phrase) -> Self {
        Value::Phrase(p.clone())
    }
}
