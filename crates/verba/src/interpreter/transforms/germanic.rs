//! English, German and Dutch articles.

use super::{Number, case_context, form, number, require_tag};
use crate::interpreter::{EvalError, Locale};
use crate::types::Value;

/// `@a` / `@an`: the indefinite article chosen by the `:a` or `:an` tag.
pub(super) fn english_a(
    value: &Value,
    _context: Option<&str>,
    _locale: &Locale,
) -> Result<String, EvalError> {
    let article = require_tag("a", value, &["a", "an"])?;
    Ok(format!("{article} {value}"))
}

pub(super) fn english_the(
    value: &Value,
    _context: Option<&str>,
    _locale: &Locale,
) -> Result<String, EvalError> {
    Ok(format!("the {value}"))
}

/// `@plural[:n]`: the `other` form, or the form for `n`.
pub(super) fn english_plural(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let key = match context.map(|c| (c, c.parse::<i64>())) {
        None => "other",
        Some((_, Ok(n))) => locale.plural_category(n).as_str(),
        Some((c, Err(_))) => c,
    };
    Ok(value.variant_text(key))
}

const CASES: [&str; 4] = ["nom", "acc", "dat", "gen"];
const GENDERS: [&str; 3] = ["masc", "fem", "neut"];

/// Definite articles by case, then masculine, feminine, neuter, plural.
const DEFINITE: [[&str; 4]; 4] = [
    ["der", "die", "das", "die"],
    ["den", "die", "das", "die"],
    ["dem", "der", "dem", "den"],
    ["des", "der", "des", "der"],
];

/// Indefinite articles. The plural has no article.
const INDEFINITE: [[&str; 4]; 4] = [
    ["ein", "eine", "ein", ""],
    ["einen", "eine", "ein", ""],
    ["einem", "einer", "einem", ""],
    ["eines", "einer", "eines", ""],
];

fn german_article(
    transform: &str,
    table: &[[&str; 4]; 4],
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let (case, count) = case_context(transform, &CASES, context, locale)?;
    let gender = require_tag(transform, value, &GENDERS)?;
    let column = match count {
        Number::Plural => 3,
        Number::Singular => GENDERS.iter().position(|g| *g == gender).unwrap_or_default(),
    };
    let full_key = format!("{}.{}", CASES[case], count.key());
    let noun = form(value, &[full_key.as_str(), CASES[case], count.key()]);
    Ok(prefixed(table[case][column], noun))
}

fn prefixed(article: &str, noun: String) -> String {
    if article.is_empty() {
        return noun;
    }
    format!("{article} {noun}")
}

/// `@der` / `@die` / `@das[:case[.number]]`.
pub(super) fn german_der(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    german_article("der", &DEFINITE, value, context, locale)
}

/// `@ein` / `@eine[:case[.number]]`.
pub(super) fn german_ein(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    german_article("ein", &INDEFINITE, value, context, locale)
}

/// `@de` / `@het[:number]`: `de` or `het` by tag, `de` for every plural.
pub(super) fn dutch_de(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let count = number("de", context, locale)?;
    let article = match count {
        Number::Singular => require_tag("de", value, &["de", "het"])?,
        Number::Plural => "de",
    };
    Ok(format!("{article} {}", form(value, &[count.key()])))
}

/// `@een[:number]`. Plural indefinites have no article.
pub(super) fn dutch_een(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let count = number("een", context, locale)?;
    let noun = form(value, &[count.key()]);
    Ok(match count {
        Number::Singular => format!("een {noun}"),
        Number::Plural => noun,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::transforms::tests::locale;
    use crate::types::{Phrase, TagSet, VariantTable};

    fn noun(tag: &str, one: &str, other: &str) -> Value {
        Phrase::builder()
            .text(one)
            .tags([tag].into_iter().collect::<TagSet>())
            .variants(VariantTable::new([("one", one), ("other", other)]).unwrap())
            .build()
            .into()
    }

    fn hund() -> Value {
        let variants =
            [("nom", "Hund"), ("dat", "Hund"), ("gen", "Hundes"), ("other", "Hunde")];
        Phrase::builder()
            .text("Hund")
            .tags(["masc"].into_iter().collect::<TagSet>())
            .variants(VariantTable::new(variants).unwrap())
            .build()
            .into()
    }

    #[test]
    fn definite_by_case_and_number() {
        let de = locale("de");
        let karte = noun("fem", "Karte", "Karten");
        assert_eq!(german_der(&hund(), Some("acc"), &de).unwrap(), "den Hund");
        assert_eq!(german_der(&hund(), Some("gen"), &de).unwrap(), "des Hundes");
        assert_eq!(german_der(&karte, Some("dat.other"), &de).unwrap(), "den Karten");
        assert_eq!(german_der(&karte, None, &de).unwrap(), "die Karte");
    }

    #[test]
    fn indefinite_plural_has_no_article() {
        let de = locale("de");
        assert_eq!(german_ein(&hund(), Some("dat"), &de).unwrap(), "einem Hund");
        let karte = noun("fem", "Karte", "Karten");
        assert_eq!(german_ein(&karte, Some("nom.3"), &de).unwrap(), "Karten");
    }

    #[test]
    fn unknown_case_is_rejected() {
        assert!(matches!(
            german_der(&hund(), Some("abl"), &locale("de")),
            Err(EvalError::InvalidTransformContext { .. })
        ));
    }

    #[test]
    fn english_plural_by_count() {
        let en = locale("en");
        let card = noun("a", "card", "cards");
        assert_eq!(english_plural(&card, None, &en).unwrap(), "cards");
        assert_eq!(english_plural(&card, Some("1"), &en).unwrap(), "card");
    }

    #[test]
    fn dutch_articles() {
        let nl = locale("nl");
        let huis = noun("het", "huis", "huizen");
        let kaart = noun("de", "kaart", "kaarten");
        assert_eq!(dutch_de(&huis, None, &nl).unwrap(), "het huis");
        assert_eq!(dutch_de(&huis, Some("2"), &nl).unwrap(), "de huizen");
        assert_eq!(dutch_de(&kaart, Some("one"), &nl).unwrap(), "de kaart");
        assert_eq!(dutch_een(&kaart, None, &nl).unwrap(), "een kaart");
        assert_eq!(dutch_een(&kaart, Some("other"), &nl).unwrap(), "kaarten");
    }
}
