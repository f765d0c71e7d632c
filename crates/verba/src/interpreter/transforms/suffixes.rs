//! Suffixing transforms: Korean particles and Turkish and Finnish case
//! endings.
//!
//! The suffix depends on the sound of the word it attaches to. Korean looks
//! at the final syllable, which the text itself tells us. Turkish and Finnish
//! vowel harmony is declared with a `:front` or `:back` tag.

use hangeul::ends_with_jongseong;

use super::{form, invalid_context, require_tag};
use crate::interpreter::{EvalError, Locale};
use crate::types::Value;

/// Particles after a final consonant, after a vowel, and when the ending is
/// not Hangul.
const KOREAN_PARTICLES: &[(&str, [&str; 3])] = &[
    ("subj", ["이", "가", "이(가)"]),
    ("obj", ["을", "를", "을(를)"]),
    ("topic", ["은", "는", "은(는)"]),
    ("and", ["과", "와", "과(와)"]),
];

/// `@particle:subj|obj|topic|and`: attaches the particle that fits the
/// final syllable.
pub(super) fn korean_particle(
    value: &Value,
    context: Option<&str>,
    _locale: &Locale,
) -> Result<String, EvalError> {
    let context = context.unwrap_or_default();
    let (_, forms) = KOREAN_PARTICLES
        .iter()
        .find(|(name, _)| *name == context)
        .ok_or_else(|| invalid_context("particle", context))?;
    let text = value.to_string();
    let particle = match ends_with_jongseong(&text) {
        Ok(true) => forms[0],
        Ok(false) => forms[1],
        Err(_) => forms[2],
    };
    Ok(format!("{text}{particle}"))
}

const TURKISH_VOWELS: &str = "aeıioöuü";
/// Consonants that devoice a following `d`.
const TURKISH_VOICELESS: &str = "fstkçşhp";

/// `@inflect:pl.loc`: appends Turkish suffixes in order.
///
/// Supports the two-way harmony suffixes `pl`, `dat`, `loc` and `abl`.
pub(super) fn turkish_inflect(
    value: &Value,
    context: Option<&str>,
    _locale: &Locale,
) -> Result<String, EvalError> {
    let front = require_tag("inflect", value, &["front", "back"])? == "front";
    let context = context.unwrap_or_default();
    let e = if front { 'e' } else { 'a' };
    let mut word = value.to_string();
    for suffix in context.split('.') {
        let last = word.chars().last();
        let after_vowel = last.is_some_and(|c| TURKISH_VOWELS.contains(c));
        let d = if last.is_some_and(|c| TURKISH_VOICELESS.contains(c)) { 't' } else { 'd' };
        let ending = match suffix {
            "pl" => format!("l{e}r"),
            "dat" if after_vowel => format!("y{e}"),
            "dat" => e.to_string(),
            "loc" => format!("{d}{e}"),
            "abl" => format!("{d}{e}n"),
            _ => return Err(invalid_context("inflect", context)),
        };
        word.push_str(&ending);
    }
    Ok(word)
}

/// Back-vowel and front-vowel forms of the Finnish endings.
const FINNISH_ENDINGS: &[(&str, [&str; 2])] = &[
    ("pl", ["t", "t"]),
    ("ine", ["ssa", "ssä"]),
    ("ela", ["sta", "stä"]),
    ("ade", ["lla", "llä"]),
    ("abl", ["lta", "ltä"]),
    ("all", ["lle", "lle"]),
    ("ess", ["na", "nä"]),
    ("tra", ["ksi", "ksi"]),
];

/// `@inflect:ine`: appends one Finnish case ending to the noun's `stem`
/// variant, or to its text when it has none.
pub(super) fn finnish_inflect(
    value: &Value,
    context: Option<&str>,
    _locale: &Locale,
) -> Result<String, EvalError> {
    let harmony = require_tag("inflect", value, &["back", "front"])?;
    let context = context.unwrap_or_default();
    let (_, endings) = FINNISH_ENDINGS
        .iter()
        .find(|(name, _)| *name == context)
        .ok_or_else(|| invalid_context("inflect", context))?;
    let ending = endings[usize::from(harmony == "front")];
    Ok(format!("{}{ending}", form(value, &["stem"])))
}
