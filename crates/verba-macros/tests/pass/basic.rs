// Phrase functions render against the published default locale.
use verba::{publish_default, verba};

verba! {
    card = :a { one: "card", *other: "cards" };
    draw($n) = "Draw {$n} {card:$n}.";
    help = "Use {{name}} syntax";
}

fn main() {
    publish_default(locale().unwrap());

    assert_eq!(card().unwrap().to_string(), "cards");
    assert_eq!(draw(1).unwrap().to_string(), "Draw 1 card.");
    assert_eq!(draw(3).unwrap().to_string(), "Draw 3 cards.");
    assert_eq!(help().unwrap().to_string(), "Use {name} syntax");
}
