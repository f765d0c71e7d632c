//! Rendering phrases: escapes, variants, calls and string context.

use verba::{EvalError, Locale, params};

fn english(source: &str) -> Locale {
    Locale::builder().language("en").source(source).build().unwrap()
}

#[test]
fn escaped_braces_render_literally() {
    let locale = english(
        r#"
        help = "Use {{name}} syntax";
        params_help = "Use {{$name}} for parameters.";
        transform_help = "Write {{@cap card:other}} to capitalize.";
        closing = "a }} b";
    "#,
    );
    assert_eq!(locale.term("help").unwrap().to_string(), "Use {name} syntax");
    assert_eq!(locale.term("params_help").unwrap().to_string(), "Use {$name} for parameters.");
    assert_eq!(
        locale.term("transform_help").unwrap().to_string(),
        "Write {@cap card:other} to capitalize."
    );
    assert_eq!(locale.term("closing").unwrap().to_string(), "a } b");
}

#[test]
fn count_selects_plural_form() {
    let locale = english(
        r#"
        card = { one: "card", other: "cards" };
        count($n) = "{card:$n}";
    "#,
    );
    for (n, expected) in [(0, "cards"), (1, "card"), (3, "cards"), (100, "cards")] {
        assert_eq!(locale.call("count", &[n.into()]).unwrap().to_string(), expected, "n = {n}");
    }
}

#[test]
fn variant_block_keeps_every_form() {
    let locale = english(r#"card = { one: "card", other: "cards" };"#);
    let card = locale.term("card").unwrap();
    assert_eq!(card.to_string(), "card");
    assert_eq!(card.variant("one"), "card");
    assert_eq!(card.variant("other"), "cards");
    assert_eq!(card.variant("few"), "cards");
}

#[test]
fn marked_entry_supplies_default_text() {
    let locale = english(r#"card = { one: "card", *other: "cards" };"#);
    assert_eq!(locale.term("card").unwrap().to_string(), "cards");
}

#[test]
fn shared_keys_and_dotted_fallback() {
    let locale = Locale::builder()
        .language("de")
        .source(
            r#"
            karte = :fem {
                nom, acc: "Karte",
                dat, gen: "Karte",
                nom.other, acc.other, dat.other, gen.other: "Karten",
                other: "Karten",
            };
        "#,
        )
        .build()
        .unwrap();
    let karte = locale.term("karte").unwrap();
    assert_eq!(karte.variant("acc"), "Karte");
    assert_eq!(karte.variant("dat.other"), "Karten");
    // No `gen.one`: falls back to `gen`.
    assert_eq!(karte.variant("gen.one"), "Karte");
}

#[test]
fn phrase_calls_with_literal_and_term_arguments() {
    let locale = english(
        r#"
        card = :a { one: "card", other: "cards" };
        draw($n) = "draw {$n} {card:$n}";
        named($who) = "{$who} says hi";
        turn = "Start: {draw(2)}. {named(\"Ana\")}. {@a card}.";
    "#,
    );
    assert_eq!(
        locale.term("turn").unwrap().to_string(),
        "Start: draw 2 cards. Ana says hi. a card."
    );
}

#[test]
fn uppercase_reference_capitalizes() {
    let locale = english(
        r#"
        card = { one: "card", other: "cards" };
        title = "{Card:other}!";
    "#,
    );
    assert_eq!(locale.term("title").unwrap().to_string(), "Cards!");
}

#[test]
fn string_context_selects_default_text() {
    let locale = Locale::builder()
        .language("en")
        .source(r#"fast = { interface: "Fast", card_text: "<b>Fast</b>", other: "Fast" };"#)
        .string_context("card_text")
        .build()
        .unwrap();
    assert_eq!(locale.string_context(), Some("card_text"));
    assert_eq!(locale.term("fast").unwrap().to_string(), "<b>Fast</b>");
    assert_eq!(locale.term("fast").unwrap().variant("interface"), "Fast");
}

#[test]
fn eval_str_renders_dynamic_templates() {
    let locale = english(r#"card = { one: "card", other: "cards" };"#);
    let text = locale.eval_str("Draw {$n} {card:$n}.", &params! { "n" => 1 }).unwrap();
    assert_eq!(text, "Draw 1 card.");

    // A template describing another template survives one evaluation.
    let stored = locale.eval_str("{{$n}} {{card:$n}}", &params! {}).unwrap();
    assert_eq!(stored, "{$n} {card:$n}");
    let second = locale.eval_str(&stored, &params! { "n" => 4 }).unwrap();
    assert_eq!(second, "4 cards");
}

#[test]
fn eval_str_reports_missing_parameters() {
    let locale = english("");
    let err = locale.eval_str("Hello {$name}", &params! {}).unwrap_err();
    assert!(matches!(err, EvalError::MissingParameter { name } if name == "name"));
}

#[test]
fn wrong_argument_count_is_an_error() {
    let locale = english(r#"draw($n) = "draw {$n}";"#);
    let err = locale.call("draw", &[]).unwrap_err();
    assert!(matches!(err, EvalError::ArgumentCount { expected: 1, got: 0, .. }));
}
