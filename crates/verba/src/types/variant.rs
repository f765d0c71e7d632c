use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A key identifying a variant of a phrase: `one`, `acc`, `nom.other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VariantKey(String);

impl VariantKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final dot-separated segment: `other` for `nom.other`.
    pub fn last_segment(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl From<&str> for VariantKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VariantKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for VariantKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("variant table has no 'other' entry (keys: {})", keys.join(", "))]
    MissingOther { keys: Vec<String> },
}

/// The variant forms of a phrase.
///
/// A non-empty table always contains an entry whose last segment is `other`,
/// which makes [`VariantTable::get`] total: every lookup ends at some entry.
/// The empty table is the variant table of a phrase with a single form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantTable {
    entries: Vec<(VariantKey, String)>,
    default: usize,
}

impl VariantTable {
    /// Builds a table from entries in declaration order.
    ///
    /// A later entry with the same key replaces the earlier one. The
    /// designated default is `other` if present, else the first key ending
    /// in `.other`.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self, VariantError>
    where
        K: Into<VariantKey>,
        V: Into<String>,
    {
        let mut table: Vec<(VariantKey, String)> = Vec::new();
        for (key, value) in entries {
            let key = key.into();
            let value = value.into();
            match table.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = value,
                None => table.push((key, value)),
            }
        }

        let default = table
            .iter()
            .position(|(key, _)| key.as_str() == "other")
            .or_else(|| table.iter().position(|(key, _)| key.last_segment() == "other"));
        match default {
            Some(default) => Ok(Self { entries: table, default }),
            None => Err(VariantError::MissingOther {
                keys: table.into_iter().map(|(key, _)| key.0).collect(),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Looks up `key` with fallback.
    ///
    /// For `a.b.c` the order is: `a.b.c`, `a.b`, `a`, then `a.b.other`,
    /// `a.other`, then the designated default. Returns `None` only for the
    /// empty table.
    pub fn get(&self, key: &str) -> Option<&str> {
        let (_, default) = self.entries.get(self.default)?;

        let mut current = key;
        loop {
            if let Some(text) = self.exact(current) {
                return Some(text);
            }
            match current.rfind('.') {
                Some(dot) => current = &current[..dot],
                None => break,
            }
        }

        let mut prefix = key;
        while let Some(dot) = prefix.rfind('.') {
            prefix = &prefix[..dot];
            if let Some(text) = self.exact(&format!("{prefix}.other")) {
                return Some(text);
            }
        }

        Some(default)
    }

    /// Looks up `key` without any fallback.
    pub fn exact(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k.as_str() == key).map(|(_, text)| text.as_str())
    }

    pub fn default_key(&self) -> Option<&VariantKey> {
        self.entries.get(self.default).map(|(key, _)| key)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&VariantKey, &str)> {
        self.entries.iter().map(|(key, text)| (key, text.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &VariantKey> {
        self.entries.iter().map(|(key, _)| key)
    }
}
