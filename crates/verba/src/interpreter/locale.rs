//! Locales: one language's validated phrase table plus the rules used to
//! render it.

use std::collections::{BTreeMap, HashMap};

use bon::bon;
use icu_locale_core::LanguageIdentifier;
use tracing::{debug, trace};
use verba_syntax::{PhraseDefinition, parse_file, parse_template, validate};

use super::evaluator::Evaluator;
use super::lint::lint_definitions;
use super::plural::{PluralCategory, PluralRule};
use super::registry::PhraseTable;
use super::tags::TagGroups;
use super::transforms::{TransformFn, TransformRegistry};
use super::{EvalError, LoadError, LoadWarning};
use crate::types::{Phrase, PhraseId, Value};

/// An immutable, validated set of phrases for one language.
///
/// A locale is built once and never changes, so it can be shared across
/// threads behind an `Arc`. Missing phrases are errors: a locale never falls
/// back to another language's definitions.
///
/// # Example
///
/// ```
/// use verba::Locale;
///
/// let locale = Locale::builder()
///     .language("en")
///     .source(r#"
///         card = :a { one: "card", other: "cards" };
///         draw($n) = "Draw {$n} {card:$n}.";
///     "#)
///     .build()
///     .unwrap();
///
/// assert_eq!(locale.call("draw", &[3.into()]).unwrap().to_string(), "Draw 3 cards.");
/// ```
#[derive(Debug)]
pub struct Locale {
    language: String,
    phrases: PhraseTable,
    transforms: TransformRegistry,
    tag_groups: TagGroups,
    plural_rule: PluralRule,

    /// When set, a variant block entry with this key supplies the default
    /// text. With `string_context = "card_text"`, the phrase
    /// `{ interface: "X", card_text: "<b>X</b>" }` renders as `<b>X</b>`.
    string_context: Option<String>,
}

#[bon]
impl Locale {
    /// Parses and validates `source` for `language`.
    ///
    /// Custom transforms are registered on top of the built-in ones for the
    /// language and replace built-ins with the same name.
    #[builder]
    pub fn new(
        #[builder(into)] language: String,
        #[builder(into)] source: String,
        #[builder(default)] transforms: BTreeMap<String, TransformFn>,
        #[builder(default)] plural_rule: PluralRule,
        #[builder(into)] string_context: Option<String>,
    ) -> Result<Locale, LoadError> {
        let identifier = language
            .parse::<LanguageIdentifier>()
            .map_err(|_| LoadError::InvalidLanguage { language: language.clone() })?;
        let base = identifier.language.as_str();

        let definitions = parse_file(&source)?;

        let mut registry = TransformRegistry::for_language(base);
        for (name, transform) in transforms {
            registry.register(name, transform);
        }
        validate(&definitions, &registry.names())
            .map_err(|errors| LoadError::Invalid { language: language.clone(), errors })?;

        let mut phrases = PhraseTable::default();
        for definition in definitions {
            phrases.insert(definition)?;
        }
        debug!(language = %language, phrases = phrases.len(), "built locale");

        Ok(Locale {
            tag_groups: TagGroups::for_language(base),
            language,
            phrases,
            transforms: registry,
            plural_rule,
            string_context,
        })
    }
}

impl Locale {
    /// The language identifier, e.g. `en` or `pt-BR`.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn string_context(&self) -> Option<&str> {
        self.string_context.as_deref()
    }

    pub fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    pub fn tag_groups(&self) -> &TagGroups {
        &self.tag_groups
    }

    pub fn plural_category(&self, n: i64) -> PluralCategory {
        self.plural_rule.category(&self.language, n)
    }

    /// Calls a phrase by name.
    ///
    /// # Errors
    ///
    /// `PhraseNotFound` if this locale does not define `name`,
    /// `ArgumentCount` if `args` does not match its parameters, and any
    /// error raised while rendering.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Phrase, EvalError> {
        let definition = self.phrases.get(name).ok_or_else(|| EvalError::PhraseNotFound {
            name: name.to_string(),
            language: self.language.clone(),
        })?;
        self.call_definition(definition, args)
    }

    /// Evaluates a phrase without parameters.
    pub fn term(&self, name: &str) -> Result<Phrase, EvalError> {
        self.call(name, &[])
    }

    /// Calls the phrase an id names. An id only matches a definition with
    /// the same arity.
    pub fn call_by_id(&self, id: PhraseId, args: &[Value]) -> Result<Phrase, EvalError> {
        let definition = self
            .phrases
            .get_by_id(id)
            .filter(|definition| definition.arity() == usize::from(id.arity()))
            .ok_or(EvalError::PhraseNotFoundById { id: id.as_u64() })?;
        self.call_definition(definition, args)
    }

    fn call_definition(
        &self,
        definition: &PhraseDefinition,
        args: &[Value],
    ) -> Result<Phrase, EvalError> {
        if definition.arity() != args.len() {
            return Err(EvalError::ArgumentCount {
                phrase: definition.name.clone(),
                expected: definition.arity(),
                got: args.len(),
            });
        }
        Evaluator::new(self).definition(definition, args)
    }

    pub fn name_for_id(&self, id: PhraseId) -> Option<&str> {
        self.phrases.name_for(id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.phrases.contains(name)
    }

    /// Phrase names in sorted order.
    pub fn phrase_names(&self) -> Vec<&str> {
        self.phrases.names()
    }

    /// The ids of every phrase, with their arities.
    pub fn phrase_ids(&self) -> Vec<PhraseId> {
        self.phrases
            .definitions()
            .map(|d| PhraseId::new(&d.name, u8::try_from(d.arity()).unwrap_or(u8::MAX)))
            .collect()
    }

    /// Checks this translation against the locale it was translated from.
    ///
    /// Reports phrases the source does not define and phrases whose
    /// parameter count differs from the source's, in name order.
    ///
    /// ```
    /// use verba::{LoadWarning, Locale};
    ///
    /// let en = Locale::builder().language("en").source(r#"hello = "Hello!";"#).build().unwrap();
    /// let ru = Locale::builder()
    ///     .language("ru")
    ///     .source(r#"hello = "Привет!"; extra = "Лишнее";"#)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     ru.validate_against(&en),
    ///     vec![LoadWarning::UnknownPhrase { name: "extra".into(), language: "ru".into() }],
    /// );
    /// ```
    pub fn validate_against(&self, source: &Locale) -> Vec<LoadWarning> {
        let mut warnings = Vec::new();
        for definition in self.phrases.definitions() {
            let Some(original) = source.phrases.get(&definition.name) else {
                warnings.push(LoadWarning::UnknownPhrase {
                    name: definition.name.clone(),
                    language: self.language.clone(),
                });
                continue;
            };
            if original.arity() != definition.arity() {
                warnings.push(LoadWarning::ParameterCountMismatch {
                    name: definition.name.clone(),
                    language: self.language.clone(),
                    source_count: original.arity(),
                    translation_count: definition.arity(),
                });
            }
        }
        debug!(
            language = %self.language,
            source = %source.language,
            warnings = warnings.len(),
            "validated translation"
        );
        warnings
    }

    /// Runs the static lints over this locale's definitions.
    pub fn lint(&self) -> Vec<LoadWarning> {
        let definitions = self.phrases.definitions().cloned().collect::<Vec<_>>();
        lint_definitions(&definitions, &self.language)
    }

    /// Parses and renders an ad-hoc template.
    ///
    /// The template may reference this locale's phrases and the parameters
    /// in `params`. It is parsed on every call.
    ///
    /// ```
    /// use verba::{Locale, params};
    ///
    /// let locale = Locale::builder()
    ///     .language("en")
    ///     .source(r#"card = { one: "card", other: "cards" };"#)
    ///     .build()
    ///     .unwrap();
    ///
    /// let text = locale.eval_str("Draw {$n} {card:$n}.", &params! { "n" => 2 }).unwrap();
    /// assert_eq!(text, "Draw 2 cards.");
    /// ```
    pub fn eval_str(
        &self,
        template: &str,
        params: &HashMap<String, Value>,
    ) -> Result<String, EvalError> {
        trace!(language = %self.language, template, "eval_str");
        let template = parse_template(template)?;
        Evaluator::new(self).render(&template, params)
    }
}
