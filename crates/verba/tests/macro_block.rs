//! Phrases defined with `verba!` and rendered through scopes.

use std::sync::Arc;

use verba::{EvalError, Locale, verba, with_locale};

mod en {
    verba::verba! {
        card = :a { one: "card", other: "cards" };
        draw($n) = "Draw {$n} {card:$n}.";
        hand($n) = :match($n) {
            0: "Your hand is empty.",
            1: "You hold {@a card}.",
            *other: "You hold {$n} {card:$n}.",
        };
    }
}

verba! {
    #![language = "pt"]
    carta = :fem { one: "carta", other: "cartas" };
    compre($n) = "Compre {@um:$n carta}.";
}

#[test]
fn generated_functions_render_in_scope() {
    let locale = Arc::new(en::locale().unwrap());
    with_locale(&locale, || {
        assert_eq!(en::draw(1).unwrap().to_string(), "Draw 1 card.");
        assert_eq!(en::hand(0).unwrap().to_string(), "Your hand is empty.");
        assert_eq!(en::hand(1).unwrap().to_string(), "You hold a card.");
        assert_eq!(en::hand(4).unwrap().to_string(), "You hold 4 cards.");
        assert!(en::card().unwrap().has_tag("a"));
    });
}

#[test]
fn embedded_source_builds_the_same_locale() {
    let rebuilt = Locale::builder().language(en::LANGUAGE).source(en::SOURCE).build().unwrap();
    assert_eq!(rebuilt.phrase_names(), vec!["card", "draw", "hand"]);
    assert_eq!(rebuilt.name_for_id(en::phrase_ids::HAND), Some("hand"));
}

#[test]
fn translations_resolve_in_their_own_locale() {
    let pt = Arc::new(locale().unwrap());
    with_locale(&pt, || {
        assert_eq!(compre(1).unwrap().to_string(), "Compre uma carta.");
        assert_eq!(compre(2).unwrap().to_string(), "Compre umas cartas.");
        assert!(matches!(en::card(), Err(EvalError::PhraseNotFound { .. })));
    });
}
