use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

/// An opaque grammatical marker attached to a phrase, such as `masc`, `an`
/// or `sun`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag(String);

impl Tag {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Tag {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// An ordered set of tags.
///
/// Declaration order is preserved because tag-driven selection uses the
/// first tag. Inserting a tag that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet(Vec<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `tag` unless already present. Returns whether it was added.
    pub fn insert(&mut self, tag: impl Into<Tag>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t.as_str() == tag)
    }

    pub fn first(&self) -> Option<&Tag> {
        self.0.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The tags as string slices, in order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(Tag::as_str).collect()
    }
}

impl<T: Into<Tag>> FromIterator<T> for TagSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for TagSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, ":{tag}")?;
        }
        Ok(())
    }
}
