// Phrase and parameter names that are Rust keywords.
use std::sync::Arc;

use verba::{verba, with_locale};

verba! {
    type = "Type";
    r#match($type) = "{$type}!";
    escapes = "quote \" and tab\t";
}

fn main() {
    let locale = Arc::new(locale().unwrap());
    with_locale(&locale, || {
        assert_eq!(r#type().unwrap().to_string(), "Type");
        assert_eq!(r#match("x").unwrap().to_string(), "x!");
        assert_eq!(escapes().unwrap().to_string(), "quote \" and tab\t");
    });
}
