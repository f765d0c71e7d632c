//! Spanish, Portuguese, French, Italian and Romanian articles and
//! preposition contractions.
//!
//! Most of them pick a form from the `:masc`/`:fem` tag and the grammatical
//! number of the context, then prepend it to the matching noun form.
//! Romanian attaches the definite article to the end of the noun instead.

use super::{Number, form, number, require_tag};
use crate::interpreter::{EvalError, Locale};
use crate::types::Value;

struct Articles {
    /// Masculine then feminine.
    singular: [&'static str; 2],
    plural: [&'static str; 2],
    /// Singular form before a `:vowel` noun, written without a space.
    elided: Option<&'static str>,
}

const GENDERS: [&str; 2] = ["masc", "fem"];

fn article(
    transform: &str,
    articles: &Articles,
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let count = number(transform, context, locale)?;
    let gender = require_tag(transform, value, &GENDERS)?;
    let column = usize::from(gender == "fem");
    let noun = form(value, &[count.key()]);
    match (count, articles.elided) {
        (Number::Singular, Some(elided)) if value.has_tag("vowel") => {
            Ok(format!("{elided}{noun}"))
        }
        (Number::Singular, _) => Ok(format!("{} {noun}", articles.singular[column])),
        (Number::Plural, _) => Ok(format!("{} {noun}", articles.plural[column])),
    }
}

const ES_EL: Articles = Articles { singular: ["el", "la"], plural: ["los", "las"], elided: None };
const ES_UN: Articles =
    Articles { singular: ["un", "una"], plural: ["unos", "unas"], elided: None };

const PT_O: Articles = Articles { singular: ["o", "a"], plural: ["os", "as"], elided: None };
const PT_UM: Articles =
    Articles { singular: ["um", "uma"], plural: ["uns", "umas"], elided: None };
const PT_DE: Articles = Articles { singular: ["do", "da"], plural: ["dos", "das"], elided: None };
const PT_EM: Articles = Articles { singular: ["no", "na"], plural: ["nos", "nas"], elided: None };

const FR_LE: Articles =
    Articles { singular: ["le", "la"], plural: ["les", "les"], elided: Some("l'") };
const FR_UN: Articles =
    Articles { singular: ["un", "une"], plural: ["des", "des"], elided: None };
const FR_DE: Articles =
    Articles { singular: ["du", "de la"], plural: ["des", "des"], elided: Some("de l'") };
const FR_AU: Articles =
    Articles { singular: ["au", "à la"], plural: ["aux", "aux"], elided: Some("à l'") };

/// `@el` / `@la[:number]`.
pub(super) fn spanish_el(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    article("el", &ES_EL, value, context, locale)
}

/// `@un` / `@una[:number]`.
pub(super) fn spanish_un(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    article("un", &ES_UN, value, context, locale)
}

/// `@o` / `@a[:number]`.
pub(super) fn portuguese_o(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    article("o", &PT_O, value, context, locale)
}

/// `@um` / `@uma[:number]`.
pub(super) fn portuguese_um(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    article("um", &PT_UM, value, context, locale)
}

/// `@de[:number]`: de + definite article, contracted.
pub(super) fn portuguese_de(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    article("de", &PT_DE, value, context, locale)
}

/// `@em[:number]`: em + definite article, contracted.
pub(super) fn portuguese_em(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    article("em", &PT_EM, value, context, locale)
}

/// `@le` / `@la[:number]`, eliding to `l'` before `:vowel`.
pub(super) fn french_le(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    article("le", &FR_LE, value, context, locale)
}

pub(super) fn french_un(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    article("un", &FR_UN, value, context, locale)
}

pub(super) fn french_de(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    article("de", &FR_DE, value, context, locale)
}

pub(super) fn french_au(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    article("au", &FR_AU, value, context, locale)
}

/// Italian article forms, each written with its trailing space or
/// apostrophe.
struct Italian {
    /// Masculine singular: plain, before `:s_imp`, before `:vowel`.
    masc: [&'static str; 3],
    /// Masculine plural: plain, before `:s_imp` or `:vowel`.
    masc_plural: [&'static str; 2],
    /// Feminine singular: plain, before `:vowel`.
    fem: [&'static str; 2],
    fem_plural: &'static str,
}

const IT_IL: Italian = Italian {
    masc: ["il ", "lo ", "l'"],
    masc_plural: ["i ", "gli "],
    fem: ["la ", "l'"],
    fem_plural: "le ",
};

/// Plural indefinites use the partitive.
const IT_UN: Italian = Italian {
    masc: ["un ", "uno ", "un "],
    masc_plural: ["dei ", "degli "],
    fem: ["una ", "un'"],
    fem_plural: "delle ",
};

const IT_DI: Italian = Italian {
    masc: ["del ", "dello ", "dell'"],
    masc_plural: ["dei ", "degli "],
    fem: ["della ", "dell'"],
    fem_plural: "delle ",
};

const IT_A: Italian = Italian {
    masc: ["al ", "allo ", "all'"],
    masc_plural: ["ai ", "agli "],
    fem: ["alla ", "all'"],
    fem_plural: "alle ",
};

fn italian(
    transform: &str,
    articles: &Italian,
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let count = number(transform, context, locale)?;
    let gender = require_tag(transform, value, &GENDERS)?;
    let vowel = value.has_tag("vowel");
    let s_imp = value.has_tag("s_imp");
    let article = match (gender, count) {
        ("fem", Number::Singular) => articles.fem[usize::from(vowel)],
        ("fem", Number::Plural) => articles.fem_plural,
        (_, Number::Singular) if vowel => articles.masc[2],
        (_, Number::Singular) => articles.masc[usize::from(s_imp)],
        (_, Number::Plural) => articles.masc_plural[usize::from(vowel || s_imp)],
    };
    Ok(format!("{article}{}", form(value, &[count.key()])))
}

/// `@il` / `@lo` / `@la[:number]`.
pub(super) fn italian_il(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    italian("il", &IT_IL, value, context, locale)
}

/// `@un` / `@uno` / `@una[:number]`.
pub(super) fn italian_un(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    italian("un", &IT_UN, value, context, locale)
}

/// `@di[:number]`: di + definite article.
pub(super) fn italian_di(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    italian("di", &IT_DI, value, context, locale)
}

/// `@a[:number]`: a + definite article.
pub(super) fn italian_a(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    italian("a", &IT_A, value, context, locale)
}

/// `@def[:number]`: the Romanian enclitic definite article.
///
/// An explicit `def.one`/`def.other` or `def` variant wins. Otherwise the
/// suffix is derived from the gender tag and the ending of the noun.
pub(super) fn romanian_def(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let count = number("def", context, locale)?;
    let full_key = format!("def.{}", count.key());
    let explicit = value.as_phrase().and_then(|phrase| {
        phrase.variants().exact(&full_key).or_else(|| phrase.variants().exact("def"))
    });
    if let Some(text) = explicit {
        return Ok(text.to_string());
    }

    let gender = require_tag("def", value, &["masc", "fem", "neut"])?;
    let noun = form(value, &[count.key()]);
    Ok(match (gender, count) {
        ("fem", Number::Singular) => match noun.strip_suffix('ă') {
            Some(stem) => format!("{stem}a"),
            None if noun.ends_with('a') => format!("{noun}ua"),
            None => format!("{noun}a"),
        },
        (_, Number::Singular) if noun.ends_with('u') => format!("{noun}l"),
        (_, Number::Singular) if noun.ends_with('e') => format!("{noun}le"),
        (_, Number::Singular) => format!("{noun}ul"),
        ("masc", Number::Plural) => format!("{noun}i"),
        (_, Number::Plural) => format!("{noun}le"),
    })
}
