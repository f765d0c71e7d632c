//! CLDR plural category resolution.
//!
//! English has only "one" and "other", Russian adds "few" and "many", and
//! Arabic uses all six categories. Rules come from `icu_plurals` and are
//! cached per thread per language on first use.

use std::cell::RefCell;
use std::fmt::{Display, Formatter, Result as FmtResult};

use icu_locale_core::Locale as IcuLocale;
use icu_plurals::{PluralCategory as IcuCategory, PluralRuleType, PluralRules};

/// A CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// The category as used in variant keys.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl Display for PluralCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl From<IcuCategory> for PluralCategory {
    fn from(category: IcuCategory) -> Self {
        match category {
            IcuCategory::Zero => PluralCategory::Zero,
            IcuCategory::One => PluralCategory::One,
            IcuCategory::Two => PluralCategory::Two,
            IcuCategory::Few => PluralCategory::Few,
            IcuCategory::Many => PluralCategory::Many,
            IcuCategory::Other => PluralCategory::Other,
        }
    }
}

/// How a locale maps integers to plural categories.
#[derive(Debug, Clone, Copy, Default)]
pub enum PluralRule {
    /// CLDR cardinal rules for the locale's language.
    #[default]
    Cldr,
    /// A caller-supplied rule, for languages or games CLDR does not cover.
    Custom(fn(i64) -> PluralCategory),
}

impl PluralRule {
    pub fn category(&self, lang: &str, n: i64) -> PluralCategory {
        match self {
            PluralRule::Cldr => cldr_category(lang, n),
            PluralRule::Custom(rule) => rule(n),
        }
    }
}

thread_local! {
    /// Rules per language tag. `None` records a language ICU has no rules for.
    static RULES: RefCell<Vec<(String, Option<PluralRules>)>> = const { RefCell::new(Vec::new()) };
}

fn build_rules(lang: &str) -> Option<PluralRules> {
    let locale = lang.parse::<IcuLocale>().ok()?;
    PluralRules::try_new(locale.into(), PluralRuleType::Cardinal.into()).ok()
}

/// CLDR cardinal category of `n` in `lang`.
///
/// A language that cannot be parsed or has no data yields `Other` for every
/// number.
///
/// ```
/// use verba::{PluralCategory, cldr_category};
///
/// assert_eq!(cldr_category("en", 1), PluralCategory::One);
/// assert_eq!(cldr_category("en", 2), PluralCategory::Other);
/// assert_eq!(cldr_category("ru", 2), PluralCategory::Few);
/// assert_eq!(cldr_category("ru", 5), PluralCategory::Many);
/// ```
pub fn cldr_category(lang: &str, n: i64) -> PluralCategory {
    RULES.with_borrow_mut(|cache| {
        let index = match cache.iter().position(|(code, _)| code == lang) {
            Some(index) => index,
            None => {
                cache.push((lang.to_string(), build_rules(lang)));
                cache.len() - 1
            }
        };
        cache[index]
            .1
            .as_ref()
            .map_or(PluralCategory::Other, |rules| rules.category_for(n).into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_ordered() {
        assert!(PluralCategory::Zero < PluralCategory::One);
        assert!(PluralCategory::Many < PluralCategory::Other);
    }

    #[test]
    fn arabic_uses_all_categories() {
        assert_eq!(cldr_category("ar", 0), PluralCategory::Zero);
        assert_eq!(cldr_category("ar", 2), PluralCategory::Two);
        assert_eq!(cldr_category("ar", 3), PluralCategory::Few);
        assert_eq!(cldr_category("ar", 11), PluralCategory::Many);
    }

    #[test]
    fn unparseable_language_is_other() {
        assert_eq!(cldr_category("not a language", 1), PluralCategory::Other);
    }

    #[test]
    fn custom_rule() {
        let rule = PluralRule::Custom(|n| {
            if n == 0 { PluralCategory::Zero } else { PluralCategory::Other }
        });
        assert_eq!(rule.category("en", 0), PluralCategory::Zero);
        assert_eq!(rule.category("en", 1), PluralCategory::Other);
    }
}
