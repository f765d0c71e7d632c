//! Measure words for Chinese, Japanese, Korean, Vietnamese and Thai.
//!
//! Counting a noun requires a classifier chosen by the noun, recorded as a
//! tag. The count itself comes from the context: `{@count:$n card}`.

use super::{invalid_context, require_tag};
use crate::interpreter::{EvalError, Locale};
use crate::types::Value;

const CHINESE: &[(&str, &str)] = &[
    ("zhang", "张"),
    ("ge", "个"),
    ("ming", "名"),
    ("wei", "位"),
    ("tiao", "条"),
    ("ben", "本"),
    ("zhi", "只"),
];

const JAPANESE: &[(&str, &str)] =
    &[("mai", "枚"), ("nin", "人"), ("hiki", "匹"), ("hon", "本"), ("ko", "個"), ("satsu", "冊")];

const KOREAN: &[(&str, &str)] =
    &[("jang", "장"), ("myeong", "명"), ("mari", "마리"), ("gae", "개"), ("gwon", "권")];

const VIETNAMESE: &[(&str, &str)] =
    &[("cai", "cái"), ("con", "con"), ("nguoi", "người"), ("chiec", "chiếc"), ("to", "tờ")];

const THAI: &[(&str, &str)] = &[("bai", "ใบ"), ("tua", "ตัว"), ("khon", "คน"), ("an", "อัน")];

/// The count and the measure word for `value`.
fn classify(
    table: &[(&str, &'static str)],
    value: &Value,
    context: Option<&str>,
) -> Result<(i64, &'static str), EvalError> {
    let context = context.unwrap_or_default();
    let count = context.trim().parse::<i64>().map_err(|_| invalid_context("count", context))?;
    let tags = table.iter().map(|(tag, _)| *tag).collect::<Vec<_>>();
    let tag = require_tag("count", value, &tags)?;
    let word = table.iter().find(|(t, _)| *t == tag).map_or("", |(_, word)| *word);
    Ok((count, word))
}

/// `3张卡`: count, classifier, noun.
pub(super) fn chinese_count(
    value: &Value,
    context: Option<&str>,
    _locale: &Locale,
) -> Result<String, EvalError> {
    let (count, word) = classify(CHINESE, value, context)?;
    Ok(format!("{count}{word}{value}"))
}

/// `カード3枚`: noun, count, counter.
pub(super) fn japanese_count(
    value: &Value,
    context: Option<&str>,
    _locale: &Locale,
) -> Result<String, EvalError> {
    let (count, word) = classify(JAPANESE, value, context)?;
    Ok(format!("{value}{count}{word}"))
}

/// `카드 3장`: noun, space, count, counter.
pub(super) fn korean_count(
    value: &Value,
    context: Option<&str>,
    _locale: &Locale,
) -> Result<String, EvalError> {
    let (count, word) = classify(KOREAN, value, context)?;
    Ok(format!("{value} {count}{word}"))
}

/// `3 con mèo`: count, classifier, noun, space separated.
pub(super) fn vietnamese_count(
    value: &Value,
    context: Option<&str>,
    _locale: &Locale,
) -> Result<String, EvalError> {
    let (count, word) = classify(VIETNAMESE, value, context)?;
    Ok(format!("{count} {word} {value}"))
}

/// `แมว 3 ตัว`: noun, count, classifier.
pub(super) fn thai_count(
    value: &Value,
    context: Option<&str>,
    _locale: &Locale,
) -> Result<String, EvalError> {
    let (count, word) = classify(THAI, value, context)?;
    Ok(format!("{value} {count} {word}"))
}
