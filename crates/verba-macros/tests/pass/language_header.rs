// A language header enables that language's transforms.
use std::sync::Arc;

use verba::{verba, with_locale};

verba! {
    #![language = "es"]
    carta = :fem { one: "carta", other: "cartas" };
    robar($n) = "Roba {@el:$n carta}.";
}

fn main() {
    assert_eq!(LANGUAGE, "es");
    let locale = Arc::new(locale().unwrap());
    with_locale(&locale, || {
        assert_eq!(robar(1).unwrap().to_string(), "Roba la carta.");
        assert_eq!(robar(2).unwrap().to_string(), "Roba las cartas.");
    });
}
