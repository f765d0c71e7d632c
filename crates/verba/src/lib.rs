//! Phrase-template localization.
//!
//! Phrases are named, parameterized templates defined per language. Calling
//! a phrase renders a [`Phrase`] that carries its variant forms and
//! grammatical tags, so it can be composed into larger phrases that agree in
//! number, gender and case.
//!
//! Definitions are usually written with the [`verba!`] macro, which checks
//! them at compile time and generates one function per phrase. Translations
//! are loaded at runtime with [`Locale::builder`] and made active with
//! [`publish_default`] or [`with_locale`].

pub mod interpreter;
mod scope;
pub mod types;

pub use interpreter::{
    EvalError, LoadError, LoadWarning, Locale, PluralCategory, PluralRule, TagGroups, TransformFn,
    TransformRegistry, cldr_category, lint_definitions,
};
pub use scope::{
    active_locale, clear_default, default_locale, eval_str, publish_default, with_active,
    with_locale,
};
pub use types::{Phrase, PhraseId, Tag, TagSet, Value, VariantError, VariantKey, VariantTable};
pub use verba_syntax::{DefinitionError, ParseError, Position};

// Re-export the verba! macro
pub use verba_macros::verba;

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, strings and
/// `Phrase` values can be passed directly.
///
/// # Example
///
/// ```
/// use verba::params;
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_text(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
