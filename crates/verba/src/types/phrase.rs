use std::fmt::{Display, Formatter, Result as FmtResult};

use bon::Builder;

use super::{Tag, TagSet, VariantTable};

/// A rendered phrase: default text plus the variant forms and tags that let
/// it compose grammatically with other phrases.
///
/// Phrases are immutable. Operations that change a phrase return a new one.
///
/// ```
/// use verba::{Phrase, TagSet, VariantTable};
///
/// let card = Phrase::builder()
///     .text("card")
///     .variants(VariantTable::new([("one", "card"), ("other", "cards")]).unwrap())
///     .tags(["a"].into_iter().collect::<TagSet>())
///     .build();
///
/// assert_eq!(card.to_string(), "card");
/// assert_eq!(card.variant("other"), "cards");
/// assert_eq!(card.variant("few"), "cards");
/// assert!(card.has_tag("a"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct Phrase {
    #[builder(into, default)]
    text: String,

    #[builder(default)]
    variants: VariantTable,

    #[builder(default)]
    tags: TagSet,
}

impl Phrase {
    /// The default text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn variants(&self) -> &VariantTable {
        &self.variants
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// The text of variant `key`, resolved with fallback. A phrase without
    /// variants returns its default text for every key.
    pub fn variant(&self, key: &str) -> &str {
        self.variants.get(key).unwrap_or(&self.text)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn first_tag(&self) -> Option<&Tag> {
        self.tags.first()
    }

    /// A copy of this phrase with different default text, keeping its tags
    /// and variants.
    pub fn with_text(&self, text: impl Into<String>) -> Phrase {
        Phrase { text: text.into(), variants: self.variants.clone(), tags: self.tags.clone() }
    }

    /// Joins phrases with a separator.
    ///
    /// Default texts are joined, and so is every variant key present in all
    /// inputs. Tags are dropped. If the shared keys do not include an `other`
    /// form the result has no variants.
    pub fn join(phrases: &[Phrase], separator: &str) -> Phrase {
        let Some((first, rest)) = phrases.split_first() else {
            return Phrase::default();
        };

        let text = phrases.iter().map(Phrase::text).collect::<Vec<_>>().join(separator);

        let shared = first
            .variants
            .keys()
            .filter(|key| rest.iter().all(|p| p.variants.exact(key.as_str()).is_some()))
            .map(|key| {
                let joined = phrases
                    .iter()
                    .map(|p| p.variants.exact(key.as_str()).unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join(separator);
                (key.clone(), joined)
            })
            .collect::<Vec<_>>();
        let variants = VariantTable::new(shared).unwrap_or_default();

        Phrase::builder().text(text).variants(variants).build()
    }
}

impl Display for Phrase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.text)
    }
}

impl From<Phrase> for String {
    fn from(phrase: Phrase) -> Self {
        phrase.text
    }
}

impl From<&str> for Phrase {
    fn from(text: &str) -> Self {
        Phrase::builder().text(text).build()
    }
}
