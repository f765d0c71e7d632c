//! Arabic definite article.

use super::require_tag;
use crate::interpreter::{EvalError, Locale};
use crate::types::Value;

const ARTICLE: &str = "ال";
const SHADDA: char = '\u{0651}';

/// `@al`: prefixes the definite article. Before a `:sun` letter the lam
/// assimilates, which is written as a shadda on the first letter of the noun.
pub(super) fn al(
    value: &Value,
    _context: Option<&str>,
    _locale: &Locale,
) -> Result<String, EvalError> {
    let letter = require_tag("al", value, &["sun", "moon"])?;
    let text = value.to_string();
    let mut chars = text.chars();
    match (letter, chars.next()) {
        ("sun", Some(first)) => Ok(format!("{ARTICLE}{first}{SHADDA}{}", chars.as_str())),
        _ => Ok(format!("{ARTICLE}{text}")),
    }
}
