//! Checking a translation against its source language.

use verba::{LoadWarning, Locale};

fn build(language: &str, source: &str) -> Locale {
    Locale::builder().language(language).source(source).build().unwrap()
}

#[test]
fn unknown_phrases_are_reported_in_name_order() {
    let en = build("en", r#"hello = "Hello!";"#);
    let ru = build(
        "ru",
        r#"
        zeta = "Зета";
        hello = "Привет!";
        alpha = "Альфа";
    "#,
    );

    assert_eq!(
        ru.validate_against(&en),
        vec![
            LoadWarning::UnknownPhrase { name: "alpha".to_string(), language: "ru".to_string() },
            LoadWarning::UnknownPhrase { name: "zeta".to_string(), language: "ru".to_string() },
        ]
    );
}

#[test]
fn parameter_count_mismatch() {
    let en = build("en", r#"greet($name) = "Hello, {$name}!";"#);
    let ru = build("ru", r#"greet($first, $last) = "{$first} {$last}";"#);

    let warnings = ru.validate_against(&en);
    assert_eq!(
        warnings,
        vec![LoadWarning::ParameterCountMismatch {
            name: "greet".to_string(),
            language: "ru".to_string(),
            source_count: 1,
            translation_count: 2,
        }]
    );
    assert_eq!(
        warnings[0].to_string(),
        "warning: phrase 'greet' in 'ru' takes 2 parameter(s) but the source takes 1"
    );
}

#[test]
fn matching_translation_has_no_warnings() {
    let en = build("en", r#"hello = "Hello!"; draw($n) = "Draw {$n}.";"#);
    let ru = build("ru", r#"hello = "Привет!"; draw($n) = "Возьмите {$n}.";"#);
    assert!(ru.validate_against(&en).is_empty());
}

#[test]
fn phrases_missing_from_the_translation_are_not_warnings() {
    let en = build("en", r#"hello = "Hello!"; bye = "Bye!";"#);
    let ru = build("ru", r#"hello = "Привет!";"#);
    assert!(ru.validate_against(&en).is_empty());
}
