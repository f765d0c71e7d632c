//! Greek articles, declined for case, gender and number.

use super::{Number, case_context, form, require_tag};
use crate::interpreter::{EvalError, Locale};
use crate::types::Value;

const CASES: [&str; 3] = ["nom", "acc", "gen"];
const GENDERS: [&str; 3] = ["masc", "fem", "neut"];

/// Definite articles by case, then number, then gender.
const DEFINITE: [[[&str; 3]; 2]; 3] = [
    [["ο", "η", "το"], ["οι", "οι", "τα"]],
    [["τον", "την", "το"], ["τους", "τις", "τα"]],
    [["του", "της", "του"], ["των", "των", "των"]],
];

/// Indefinite articles by case, then gender. There is no plural form.
const INDEFINITE: [[&str; 3]; 3] = [
    ["ένας", "μία", "ένα"],
    ["έναν", "μία", "ένα"],
    ["ενός", "μιας", "ενός"],
];

/// The gender column, the case and number, and the declined noun.
fn decline(
    transform: &str,
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<(usize, usize, Number, String), EvalError> {
    let (case, count) = case_context(transform, &CASES, context, locale)?;
    let gender = require_tag(transform, value, &GENDERS)?;
    let column = GENDERS.iter().position(|g| *g == gender).unwrap_or_default();
    let full_key = format!("{}.{}", CASES[case], count.key());
    let noun = form(value, &[full_key.as_str(), CASES[case], count.key()]);
    Ok((column, case, count, noun))
}

/// `@o` / `@i` / `@to[:case[.number]]`.
pub(super) fn o(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let (gender, case, count, noun) = decline("o", value, context, locale)?;
    let row = usize::from(count == Number::Plural);
    Ok(format!("{} {noun}", DEFINITE[case][row][gender]))
}

/// `@enas` / `@mia` / `@ena[:case[.number]]`. Plurals take no article.
pub(super) fn enas(
    value: &Value,
    context: Option<&str>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let (gender, case, count, noun) = decline("enas", value, context, locale)?;
    Ok(match count {
        Number::Singular => format!("{} {noun}", INDEFINITE[case][gender]),
        Number::Plural => noun,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::transforms::tests::locale;
    use crate::types::{Phrase, TagSet, VariantTable};

    fn karta() -> Value {
        Phrase::builder()
            .text("κάρτα")
            .tags(["fem"].into_iter().collect::<TagSet>())
            .variants(
                VariantTable::new([
                    ("nom.one", "κάρτα"),
                    ("gen.one", "κάρτας"),
                    ("nom.other", "κάρτες"),
                    ("gen.other", "καρτών"),
                    ("other", "κάρτες"),
                ])
                .unwrap(),
            )
            .build()
            .into()
    }

    #[test]
    fn definite_article_declines() {
        let el = locale("el");
        assert_eq!(o(&karta(), None, &el).unwrap(), "η κάρτα");
        assert_eq!(o(&karta(), Some("gen"), &el).unwrap(), "της κάρτας");
        assert_eq!(o(&karta(), Some("acc.other"), &el).unwrap(), "τις κάρτες");
        assert_eq!(o(&karta(), Some("gen.7"), &el).unwrap(), "των καρτών");
    }

    #[test]
    fn indefinite_article_is_singular_only() {
        let el = locale("el");
        let paiktis: Value = Phrase::builder()
            .text("παίκτη")
            .tags(["masc"].into_iter().collect::<TagSet>())
            .build()
            .into();
        assert_eq!(enas(&paiktis, Some("acc"), &el).unwrap(), "έναν παίκτη");
        assert_eq!(enas(&karta(), Some("nom.other"), &el).unwrap(), "κάρτες");
    }
}
