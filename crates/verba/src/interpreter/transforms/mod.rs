//! Transform registry and the built-in transforms.
//!
//! A transform is a plain function from a value and an optional context to
//! rendered text, evaluated against the calling locale. Each locale owns its
//! own registry, seeded from the built-in table for its language.

mod arabic;
mod counters;
mod germanic;
mod greek;
mod hindi;
mod romance;
mod suffixes;
mod universal;

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use verba_syntax::{TransformId, accepted_transform_names, resolve_transform};

use super::plural::PluralCategory;
use crate::interpreter::{EvalError, Locale};
use crate::types::Value;

/// Transform function signature.
///
/// Takes:
/// - `value`: the value to transform, with its tags and variants
/// - `context`: the `:context` suffix, already resolved to text
/// - `locale`: the calling locale, for its language and plural rule
pub type TransformFn = fn(&Value, Option<&str>, &Locale) -> Result<String, EvalError>;

/// Named transforms available to one locale.
#[derive(Clone, Default)]
pub struct TransformRegistry {
    transforms: BTreeMap<String, TransformFn>,
}

impl TransformRegistry {
    /// The built-in transforms for a primary language subtag, aliases
    /// included.
    pub fn for_language(lang: &str) -> Self {
        let transforms = accepted_transform_names(lang)
            .into_iter()
            .filter_map(|name| {
                resolve_transform(name, lang).map(|id| (name.to_string(), builtin(id)))
            })
            .collect();
        Self { transforms }
    }

    /// Adds or replaces a transform.
    pub fn register(&mut self, name: impl Into<String>, transform: TransformFn) {
        self.transforms.insert(name.into(), transform);
    }

    pub fn get(&self, name: &str) -> Option<TransformFn> {
        self.transforms.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.transforms.keys().map(String::as_str).collect()
    }

    pub fn apply(
        &self,
        name: &str,
        value: &Value,
        context: Option<&str>,
        locale: &Locale,
    ) -> Result<String, EvalError> {
        let transform =
            self.get(name).ok_or_else(|| EvalError::UnknownTransform { name: name.to_string() })?;
        transform(value, context, locale)
    }
}

impl Debug for TransformRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TransformRegistry").field("names", &self.names()).finish()
    }
}

fn builtin(id: TransformId) -> TransformFn {
    match id {
        TransformId::Cap => universal::cap,
        TransformId::Upper => universal::upper,
        TransformId::Lower => universal::lower,
        TransformId::EnglishA => germanic::english_a,
        TransformId::EnglishThe => germanic::english_the,
        TransformId::EnglishPlural => germanic::english_plural,
        TransformId::GermanDer => germanic::german_der,
        TransformId::GermanEin => germanic::german_ein,
        TransformId::DutchDe => germanic::dutch_de,
        TransformId::DutchEen => germanic::dutch_een,
        TransformId::SpanishEl => romance::spanish_el,
        TransformId::SpanishUn => romance::spanish_un,
        TransformId::PortugueseO => romance::portuguese_o,
        TransformId::PortugueseUm => romance::portuguese_um,
        TransformId::PortugueseDe => romance::portuguese_de,
        TransformId::PortugueseEm => romance::portuguese_em,
        TransformId::FrenchLe => romance::french_le,
        TransformId::FrenchUn => romance::french_un,
        TransformId::FrenchDe => romance::french_de,
        TransformId::FrenchAu => romance::french_au,
        TransformId::ItalianIl => romance::italian_il,
        TransformId::ItalianUn => romance::italian_un,
        TransformId::ItalianDi => romance::italian_di,
        TransformId::ItalianA => romance::italian_a,
        TransformId::RomanianDef => romance::romanian_def,
        TransformId::GreekO => greek::o,
        TransformId::GreekEnas => greek::enas,
        TransformId::ArabicAl => arabic::al,
        TransformId::ChineseCount => counters::chinese_count,
        TransformId::JapaneseCount => counters::japanese_count,
        TransformId::KoreanCount => counters::korean_count,
        TransformId::VietnameseCount => counters::vietnamese_count,
        TransformId::ThaiCount => counters::thai_count,
        TransformId::KoreanParticle => suffixes::korean_particle,
        TransformId::TurkishInflect => suffixes::turkish_inflect,
        TransformId::FinnishInflect => suffixes::finnish_inflect,
        TransformId::HindiKa => hindi::ka,
        TransformId::HindiKo => hindi::ko,
        TransformId::HindiSe => hindi::se,
        TransformId::HindiMe => hindi::me,
        TransformId::HindiPar => hindi::par,
        TransformId::HindiNe => hindi::ne,
    }
}

/// Returns the single tag of `expected` that `value` carries.
///
/// Fails with `MissingTag` when it carries none, and with
/// `UnsupportedTagCombination` when it carries more than one.
fn require_tag<'t>(
    transform: &str,
    value: &Value,
    expected: &[&'t str],
) -> Result<&'t str, EvalError> {
    let found = expected.iter().copied().filter(|tag| value.has_tag(tag)).collect::<Vec<_>>();
    match found.as_slice() {
        [tag] => Ok(*tag),
        [] => Err(EvalError::MissingTag {
            transform: transform.to_string(),
            expected: expected.iter().map(ToString::to_string).collect(),
            value: value.to_string(),
        }),
        _ => Err(EvalError::UnsupportedTagCombination {
            transform: transform.to_string(),
            tags: found.iter().map(ToString::to_string).collect(),
        }),
    }
}

/// Grammatical number requested by a transform context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Number {
    Singular,
    Plural,
}

impl Number {
    fn key(self) -> &'static str {
        match self {
            Number::Singular => "one",
            Number::Plural => "other",
        }
    }

    fn of(category: PluralCategory) -> Number {
        match category {
            PluralCategory::One => Number::Singular,
            PluralCategory::Zero
            | PluralCategory::Two
            | PluralCategory::Few
            | PluralCategory::Many
            | PluralCategory::Other => Number::Plural,
        }
    }
}

/// Reads a number context: absent or `one` is singular, any other plural
/// category is plural, and an integer is categorized by the locale's rule.
fn number(transform: &str, context: Option<&str>, locale: &Locale) -> Result<Number, EvalError> {
    let Some(context) = context else {
        return Ok(Number::Singular);
    };
    if let Ok(n) = context.parse::<i64>() {
        return Ok(Number::of(locale.plural_category(n)));
    }
    match context {
        "one" => Ok(Number::Singular),
        "zero" | "two" | "few" | "many" | "other" => Ok(Number::Plural),
        _ => Err(invalid_context(transform, context)),
    }
}

/// Splits a `case[.number]` context such as `acc`, `dat.other` or `gen.3`
/// into an index into `cases` and a number. The case defaults to the first.
fn case_context(
    transform: &str,
    cases: &[&str],
    context: Option<&str>,
    locale: &Locale,
) -> Result<(usize, Number), EvalError> {
    let Some(context) = context else {
        return Ok((0, Number::Singular));
    };
    let (case, rest) = match context.split_once('.') {
        Some((case, rest)) => (case, Some(rest)),
        None => (context, None),
    };
    let index = cases
        .iter()
        .position(|c| *c == case)
        .ok_or_else(|| invalid_context(transform, context))?;
    let count = number(transform, rest, locale).map_err(|_| invalid_context(transform, context))?;
    Ok((index, count))
}

/// The first of `keys` the value has an exact variant for, else its text.
fn form(value: &Value, keys: &[&str]) -> String {
    value
        .as_phrase()
        .and_then(|phrase| keys.iter().find_map(|key| phrase.variants().exact(key)))
        .map_or_else(|| value.to_string(), str::to_string)
}

fn invalid_context(transform: &str, context: &str) -> EvalError {
    EvalError::InvalidTransformContext {
        transform: transform.to_string(),
        context: context.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::PluralRule;
    use crate::types::{Phrase, TagSet};

    /// An empty locale for calling transforms directly.
    pub(super) fn locale(lang: &str) -> Locale {
        Locale::builder().language(lang).source("").build().unwrap()
    }

    fn tagged(text: &str, tags: &[&str]) -> Value {
        Phrase::builder().text(text).tags(tags.iter().copied().collect::<TagSet>()).build().into()
    }

    #[test]
    fn require_tag_reports_missing_and_conflicting() {
        let both = tagged("x", &["masc", "fem"]);
        assert!(matches!(
            require_tag("el", &both, &["masc", "fem"]),
            Err(EvalError::UnsupportedTagCombination { .. })
        ));
        let none = tagged("x", &[]);
        assert!(matches!(
            require_tag("el", &none, &["masc", "fem"]),
            Err(EvalError::MissingTag { .. })
        ));
        assert_eq!(require_tag("el", &tagged("x", &["fem"]), &["masc", "fem"]).unwrap(), "fem");
    }

    #[test]
    fn number_contexts() {
        let en = locale("en");
        assert_eq!(number("t", None, &en).unwrap(), Number::Singular);
        assert_eq!(number("t", Some("3"), &en).unwrap(), Number::Plural);
        assert_eq!(number("t", Some("1"), &en).unwrap(), Number::Singular);
        assert_eq!(number("t", Some("many"), &en).unwrap(), Number::Plural);
        assert!(number("t", Some("acc"), &en).is_err());
    }

    #[test]
    fn numbers_follow_a_custom_plural_rule() {
        let always_one = Locale::builder()
            .language("en")
            .source("")
            .plural_rule(PluralRule::Custom(|_| PluralCategory::One))
            .build()
            .unwrap();
        assert_eq!(number("t", Some("5"), &always_one).unwrap(), Number::Singular);
    }

    #[test]
    fn case_contexts() {
        let de = locale("de");
        let cases = ["nom", "acc"];
        assert_eq!(case_context("t", &cases, None, &de).unwrap(), (0, Number::Singular));
        assert_eq!(case_context("t", &cases, Some("acc.2"), &de).unwrap(), (1, Number::Plural));
        assert!(case_context("t", &cases, Some("dat"), &de).is_err());
        assert!(case_context("t", &cases, Some("acc.x"), &de).is_err());
    }

    #[test]
    fn registry_seeds_language_and_universal_names() {
        let registry = TransformRegistry::for_language("es");
        assert!(registry.contains("cap"));
        assert!(registry.contains("la"));
        assert!(!registry.contains("the"));
    }
}
