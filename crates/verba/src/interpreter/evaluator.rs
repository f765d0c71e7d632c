//! Template evaluation.
//!
//! Evaluation walks a definition's templates left to right, resolving
//! references against the call's parameters and the locale's other phrases,
//! then applying selectors and transforms. State lives on the stack of the
//! call. Any failure aborts the whole call.

use std::collections::HashMap;

use verba_syntax::{
    Argument, Interpolation, PhraseBody, PhraseDefinition, Reference, Segment, Selector, Template,
    VariantEntry,
};

use super::matcher::{candidates, select};
use super::{EvalError, Locale};
use crate::types::{Phrase, TagSet, Value, VariantTable};

/// Parameter name to bound value.
type Bindings<'a> = HashMap<&'a str, Value>;

pub(crate) struct Evaluator<'l> {
    locale: &'l Locale,
}

impl<'l> Evaluator<'l> {
    pub(crate) fn new(locale: &'l Locale) -> Self {
        Self { locale }
    }

    /// Evaluates a definition. The caller has checked the argument count.
    ///
    /// Tags are the local tags plus whatever `:from` inherits. The default
    /// text and variants depend on the body:
    /// - a plain variant block renders every entry; the `*` entry, the string
    ///   context entry or the first entry supplies the default text;
    /// - a template or `:match` body whose `:from` source has variants is
    ///   rendered once per source variant, with the parameter bound to that
    ///   variant.
    pub(crate) fn definition<'d>(
        &self,
        definition: &'d PhraseDefinition,
        args: &[Value],
    ) -> Result<Phrase, EvalError> {
        let bindings: Bindings<'d> =
            definition.parameters.iter().map(String::as_str).zip(args.iter().cloned()).collect();
        let source = match &definition.from_param {
            Some(param) => Some(lookup(&bindings, param)?),
            None => None,
        };

        let local = definition.tags.iter().map(String::as_str).collect::<TagSet>();
        let tags = match source {
            Some(source) => self.locale.tag_groups().inherit(&local, &source.tags()),
            None => local,
        };

        let (text, variants) = match &definition.body {
            PhraseBody::Variants(entries) if definition.match_params.is_empty() => {
                self.variant_block(entries, &bindings)?
            }
            PhraseBody::Template(_) | PhraseBody::Variants(_) => {
                self.per_source_variant(definition, source, &bindings)?
            }
        };
        Ok(Phrase::builder().text(text).variants(variants).tags(tags).build())
    }

    /// Renders a template against a caller-supplied parameter map.
    pub(crate) fn render(
        &self,
        template: &Template,
        params: &HashMap<String, Value>,
    ) -> Result<String, EvalError> {
        let bindings: Bindings<'_> =
            params.iter().map(|(name, value)| (name.as_str(), value.clone())).collect();
        self.template(template, &bindings)
    }

    fn variant_block(
        &self,
        entries: &[VariantEntry],
        bindings: &Bindings<'_>,
    ) -> Result<(String, VariantTable), EvalError> {
        let mut forms: Vec<(String, String)> = Vec::new();
        let mut marked = None;
        for entry in entries {
            let text = self.template(&entry.template, bindings)?;
            for key in &entry.keys {
                if key.is_default_marker() && marked.is_none() {
                    marked = Some(text.clone());
                }
                forms.push((key.variant_key(), text.clone()));
            }
        }

        let from_context = self.locale.string_context().and_then(|context| {
            forms.iter().find(|(key, _)| key == context).map(|(_, text)| text.clone())
        });
        let text = from_context
            .or(marked)
            .or_else(|| forms.first().map(|(_, text)| text.clone()))
            .unwrap_or_default();
        Ok((text, VariantTable::new(forms)?))
    }

    fn per_source_variant<'d>(
        &self,
        definition: &'d PhraseDefinition,
        source: Option<&Value>,
        bindings: &Bindings<'d>,
    ) -> Result<(String, VariantTable), EvalError> {
        let text = self.body(definition, bindings)?;
        let param = definition.from_param.as_deref();
        let phrase = source.and_then(Value::as_phrase).filter(|p| !p.variants().is_empty());
        let (Some(param), Some(phrase)) = (param, phrase) else {
            return Ok((text, VariantTable::default()));
        };

        let mut forms = Vec::new();
        for (key, variant_text) in phrase.variants().iter() {
            let mut scoped = bindings.clone();
            scoped.insert(param, Value::Phrase(phrase.with_text(variant_text)));
            forms.push((key.clone(), self.body(definition, &scoped)?));
        }
        Ok((text, VariantTable::new(forms)?))
    }

    /// Renders a template body, or the selected arm of a `:match` body.
    fn body(
        &self,
        definition: &PhraseDefinition,
        bindings: &Bindings<'_>,
    ) -> Result<String, EvalError> {
        let arms = match &definition.body {
            PhraseBody::Template(template) => return self.template(template, bindings),
            PhraseBody::Variants(arms) => arms,
        };
        let values = definition
            .match_params
            .iter()
            .map(|param| lookup(bindings, param))
            .collect::<Result<Vec<_>, _>>()?;
        let keys = values
            .iter()
            .map(|value| candidates(value, |n| self.locale.plural_category(n)))
            .collect::<Vec<_>>();
        let template = select(arms, &keys).ok_or_else(|| EvalError::NoMatchingVariant {
            phrase: definition.name.clone(),
            values: values.iter().map(ToString::to_string).collect(),
        })?;
        self.template(template, bindings)
    }

    fn template(&self, template: &Template, bindings: &Bindings<'_>) -> Result<String, EvalError> {
        let mut output = String::new();
        for segment in &template.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Interpolation(interpolation) => {
                    output.push_str(&self.interpolation(interpolation, bindings)?);
                }
            }
        }
        Ok(output)
    }

    /// Resolve, then select, then transform.
    fn interpolation(
        &self,
        interpolation: &Interpolation,
        bindings: &Bindings<'_>,
    ) -> Result<String, EvalError> {
        let value = self.reference(&interpolation.reference, bindings)?;
        let value = self.select_variant(value, &interpolation.selectors, bindings)?;
        let Some(transform) = &interpolation.transform else {
            return Ok(value.to_string());
        };
        let context =
            transform.context.as_ref().map(|context| self.context(context, bindings)).transpose()?;
        self.locale.transforms().apply(&transform.name, &value, context.as_deref(), self.locale)
    }

    fn reference(
        &self,
        reference: &Reference,
        bindings: &Bindings<'_>,
    ) -> Result<Value, EvalError> {
        match reference {
            Reference::Parameter(name) => lookup(bindings, name).cloned(),
            Reference::Term(name) => self.locale.term(name).map(Value::Phrase),
            Reference::Call { name, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.argument(arg, bindings))
                    .collect::<Result<Vec<_>, _>>()?;
                self.locale.call(name, &args).map(Value::Phrase)
            }
        }
    }

    fn argument(&self, argument: &Argument, bindings: &Bindings<'_>) -> Result<Value, EvalError> {
        match argument {
            Argument::Parameter(name) => lookup(bindings, name).cloned(),
            Argument::Number(n) => Ok(Value::Number(*n)),
            Argument::Text(text) => Ok(Value::Text(text.clone())),
            Argument::Term(name) => self.locale.term(name).map(Value::Phrase),
        }
    }

    /// Applies `:key` selectors. Selectors on numbers and text select
    /// nothing and leave the value unchanged.
    fn select_variant(
        &self,
        value: Value,
        selectors: &[Selector],
        bindings: &Bindings<'_>,
    ) -> Result<Value, EvalError> {
        if selectors.is_empty() {
            return Ok(value);
        }
        let phrase = match value {
            Value::Phrase(phrase) => phrase,
            other @ (Value::Number(_) | Value::Text(_)) => return Ok(other),
        };
        let key = selectors
            .iter()
            .map(|selector| self.selector_key(selector, bindings))
            .collect::<Result<Vec<_>, _>>()?
            .join(".");
        let text = phrase.variant(&key).to_string();
        Ok(Value::Phrase(phrase.with_text(text)))
    }

    /// A selector's key: numbers select their plural category, and phrases
    /// select by their first tag.
    fn selector_key(
        &self,
        selector: &Selector,
        bindings: &Bindings<'_>,
    ) -> Result<String, EvalError> {
        let name = match selector {
            Selector::Literal(key) => return Ok(key.clone()),
            Selector::Parameter(name) => name,
        };
        let value = lookup(bindings, name)?;
        if let Some(n) = value.numeric() {
            return Ok(self.locale.plural_category(n).as_str().to_string());
        }
        match value {
            Value::Phrase(phrase) => phrase.first_tag().map(ToString::to_string).ok_or_else(|| {
                EvalError::UntaggedSelector { parameter: name.clone(), value: phrase.to_string() }
            }),
            Value::Number(_) | Value::Text(_) => Ok(value.to_string()),
        }
    }

    /// A transform context as text. Numbers render as digits so transforms
    /// can categorize them, and phrases contribute their first tag.
    fn context(&self, context: &Selector, bindings: &Bindings<'_>) -> Result<String, EvalError> {
        match context {
            Selector::Literal(text) => Ok(text.clone()),
            Selector::Parameter(name) => Ok(match lookup(bindings, name)? {
                Value::Phrase(phrase) => phrase
                    .first_tag()
                    .map_or_else(|| phrase.to_string(), ToString::to_string),
                value @ (Value::Number(_) | Value::Text(_)) => value.to_string(),
            }),
        }
    }
}

fn lookup<'b>(bindings: &'b Bindings<'_>, name: &str) -> Result<&'b Value, EvalError> {
    bindings.get(name).ok_or_else(|| EvalError::MissingParameter { name: name.to_string() })
}
