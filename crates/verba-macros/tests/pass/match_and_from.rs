// :match arms and :from inheritance through generated functions.
use std::sync::Arc;

use verba::{verba, with_locale};

verba! {
    ally = :an { one: "ally", other: "allies" };
    cards($n) = :match($n) {
        0: "no cards",
        1: "a card",
        *other: "{$n} cards",
    };
    subtype($s) = :from($s) "<b>{$s}</b>";
    count_subtype($n, $s) = :from($s) "{$n} {subtype($s):$n}";
}

fn main() {
    let locale = Arc::new(locale().unwrap());
    with_locale(&locale, || {
        assert_eq!(cards(0).unwrap().to_string(), "no cards");
        assert_eq!(cards(1).unwrap().to_string(), "a card");
        assert_eq!(cards(7).unwrap().to_string(), "7 cards");

        let subtype = subtype(ally().unwrap()).unwrap();
        assert!(subtype.has_tag("an"));
        assert_eq!(subtype.variant("other"), "<b>allies</b>");

        assert_eq!(count_subtype(2, ally().unwrap()).unwrap().to_string(), "2 <b>allies</b>");
    });
}
