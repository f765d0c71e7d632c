//! `:match` selection: exact arms, wildcard arms and the catch-all.

use verba::{EvalError, Locale};

fn locale() -> Locale {
    Locale::builder()
        .language("es")
        .source(
            r#"
            aliado = :masc "aliado";
            carta = :fem "carta";
            cards($n) = :match($n) {
                0: "no cards",
                1: "a card",
                *other: "{$n} cards",
            };
            count($n, $t) = :match($n, $t) {
                1.masc: "exact",
                *.fem: "any feminine",
                one.*: "any singular",
                *other: "catch-all",
            };
            strict($n) = :match($n) {
                1: "one",
                2: "two",
            };
        "#,
        )
        .build()
        .unwrap()
}

fn render(locale: &Locale, name: &str, args: &[verba::Value]) -> String {
    locale.call(name, args).unwrap().to_string()
}

#[test]
fn numeric_literal_beats_category() {
    let locale = locale();
    assert_eq!(render(&locale, "cards", &[0.into()]), "no cards");
    assert_eq!(render(&locale, "cards", &[1.into()]), "a card");
    assert_eq!(render(&locale, "cards", &[5.into()]), "5 cards");
}

#[test]
fn exact_beats_wildcard_beats_catch_all() {
    let locale = locale();
    let aliado = locale.term("aliado").unwrap();
    let carta = locale.term("carta").unwrap();

    assert_eq!(render(&locale, "count", &[1.into(), aliado.clone().into()]), "exact");
    assert_eq!(render(&locale, "count", &[1.into(), carta.clone().into()]), "any feminine");
    assert_eq!(render(&locale, "count", &[3.into(), carta.into()]), "any feminine");
    assert_eq!(render(&locale, "count", &[3.into(), aliado.into()]), "catch-all");
}

#[test]
fn numeric_text_selects_like_a_number() {
    let locale = locale();
    assert_eq!(render(&locale, "cards", &["1".into()]), "a card");
    assert_eq!(render(&locale, "cards", &["12".into()]), "12 cards");
}

#[test]
fn no_matching_arm_is_an_error() {
    let locale = locale();
    let err = locale.call("strict", &[3.into()]).unwrap_err();
    match err {
        EvalError::NoMatchingVariant { phrase, values } => {
            assert_eq!(phrase, "strict");
            assert_eq!(values, vec!["3"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}
