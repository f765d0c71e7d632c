//! Hindi postpositions.
//!
//! A postposition follows the oblique form of the noun, taken from its
//! `obl.one`/`obl.other` or `obl` variant. The genitive `का` also agrees with
//! the possessed noun, whose gender and number come from the context.

use super::{Number, form, invalid_context, number};
use crate::interpreter::{EvalError, Locale};
use crate::types::Value;

fn oblique(value: &Value, count: Number) -> String {
    let key = format!("obl.{}", count.key());
    form(value, &[key.as_str(), "obl"])
}

fn postposition(
    transform: &str,
    word: &str,
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let count = number(transform, context, locale)?;
    Ok(format!("{} {word}", oblique(value, count)))
}

/// `@ka` / `@ki` / `@ke[:gender[.number]]`: का, की or के, agreeing with the
/// possessed noun.
pub(super) fn ka(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let (gender, rest) = match context.map(|c| c.split_once('.').unwrap_or((c, ""))) {
        None => ("masc", ""),
        Some((gender, rest)) => (gender, rest),
    };
    let count = match rest {
        "" => Number::Singular,
        rest => number("ka", Some(rest), locale)?,
    };
    let word = match (gender, count) {
        ("fem", _) => "की",
        ("masc", Number::Singular) => "का",
        ("masc", Number::Plural) => "के",
        _ => return Err(invalid_context("ka", context.unwrap_or_default())),
    };
    Ok(format!("{} {word}", oblique(value, Number::Singular)))
}

/// `@ko[:number]`: को.
pub(super) fn ko(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    postposition("ko", "को", value, context, locale)
}

/// `@se[:number]`: से.
pub(super) fn se(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    postposition("se", "से", value, context, locale)
}

/// `@me[:number]`: में.
pub(super) fn me(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    postposition("me", "में", value, context, locale)
}

/// `@par[:number]`: पर.
pub(super) fn par(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    postposition("par", "पर", value, context, locale)
}

/// `@ne[:number]`: ने.
pub(super) fn ne(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    postposition("ne", "ने", value, context, locale)
}
