//! Case transforms available in every language.
//!
//! Case mapping is language sensitive (Turkish dotted i, Greek final sigma)
//! and a no-op for scripts without case.

use icu_casemap::CaseMapper;
use icu_locale_core::{LanguageIdentifier, langid};
use unicode_segmentation::UnicodeSegmentation;

use crate::interpreter::{EvalError, Locale};
use crate::types::Value;

fn language(lang: &str) -> LanguageIdentifier {
    lang.parse().unwrap_or_else(|_| langid!("und"))
}

fn uppercase(text: &str, lang: &str) -> String {
    CaseMapper::new().uppercase_to_string(text, &language(lang)).to_string()
}

/// Uppercases the first grapheme and leaves the rest untouched.
pub(super) fn cap(
    value: &Value,
    _context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let text = value.to_string();
    let Some(first) = text.graphemes(true).next() else {
        return Ok(text);
    };
    Ok(format!("{}{}", uppercase(first, locale.language()), &text[first.len()..]))
}

pub(super) fn upper(
    value: &Value,
    _context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    Ok(uppercase(&value.to_string(), locale.language()))
}

pub(super) fn lower(
    value: &Value,
    _context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let lang = language(locale.language());
    Ok(CaseMapper::new().lowercase_to_string(&value.to_string(), &lang).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::transforms::tests::locale;

    #[test]
    fn cap_handles_combining_marks_and_empty_text() {
        assert_eq!(cap(&"e\u{301}cole".into(), None, &locale("fr")).unwrap(), "E\u{301}cole");
        assert_eq!(cap(&"".into(), None, &locale("en")).unwrap(), "");
    }

    #[test]
    fn turkish_dotted_i() {
        assert_eq!(upper(&"istanbul".into(), None, &locale("tr")).unwrap(), "İSTANBUL");
        assert_eq!(upper(&"istanbul".into(), None, &locale("en")).unwrap(), "ISTANBUL");
    }

    #[test]
    fn caseless_scripts_are_unchanged() {
        assert_eq!(cap(&"カード".into(), None, &locale("ja")).unwrap(), "カード");
        assert_eq!(lower(&"ABC".into(), None, &locale("xx")).unwrap(), "abc");
    }
}
