// PhraseId constants resolve against the active locale.
use std::sync::Arc;

use verba::{PhraseId, verba, with_locale};

verba! {
    fire = "Fire";
    damage($n) = "{$n} damage";
}

fn main() {
    assert_eq!(phrase_ids::FIRE, PhraseId::new("fire", 0));
    assert_eq!(phrase_ids::DAMAGE.arity(), 1);

    let locale = Arc::new(locale().unwrap());
    with_locale(&locale, || {
        assert_eq!(phrase_ids::FIRE.resolve().unwrap().to_string(), "Fire");
        assert_eq!(phrase_ids::DAMAGE.call(&[5.into()]).unwrap().to_string(), "5 damage");
        assert_eq!(phrase_ids::DAMAGE.name().unwrap(), "damage");
    });
}
