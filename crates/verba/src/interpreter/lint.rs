//! Static lint rules for phrase definitions.
//!
//! Lints read the parsed definitions only. They flag verbose `:from`
//! patterns and parameters whose tags are likely dropped.

use verba_syntax::{
    Argument, EntryKey, Interpolation, PhraseBody, PhraseDefinition, Reference, Segment, Selector,
    Template, VariantEntry,
};

use super::LoadWarning;

/// Runs every lint over `definitions`. `language` is only used to label the
/// warnings.
pub fn lint_definitions(definitions: &[PhraseDefinition], language: &str) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();
    for definition in definitions {
        redundant_passthrough_block(definition, language, &mut warnings);
        redundant_from_selector(definition, language, &mut warnings);
        likely_missing_from(definition, language, &mut warnings);
        verbose_transparent_wrapper(definition, language, &mut warnings);
    }
    warnings
}

/// The `:from` parameter and entries of a plain `:from` variant block.
fn from_block(definition: &PhraseDefinition) -> Option<(&str, &[VariantEntry])> {
    let from = definition.from_param.as_deref()?;
    match &definition.body {
        PhraseBody::Variants(entries) if definition.match_params.is_empty() => {
            Some((from, entries))
        }
        PhraseBody::Variants(_) | PhraseBody::Template(_) => None,
    }
}

/// The selector key when `interpolation` is `{$from:key}` for one of `keys`.
fn passthrough_key<'i>(
    interpolation: &'i Interpolation,
    from: &str,
    keys: &[EntryKey],
) -> Option<&'i str> {
    if interpolation.transform.is_some() {
        return None;
    }
    let Reference::Parameter(name) = &interpolation.reference else {
        return None;
    };
    let [Selector::Literal(key)] = interpolation.selectors.as_slice() else {
        return None;
    };
    (name == from && keys.iter().any(|k| k.variant_key() == *key)).then_some(key.as_str())
}

#[derive(Debug, PartialEq)]
enum Shape<'t> {
    Literal(&'t str),
    Passthrough,
    Other,
}

/// `template` with its single passthrough of `from` replaced by a marker.
fn passthrough_shape<'t>(
    template: &'t Template,
    from: &str,
    keys: &[EntryKey],
) -> Option<Vec<Shape<'t>>> {
    let mut found = false;
    let mut shape = Vec::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => shape.push(Shape::Literal(text.as_str())),
            Segment::Interpolation(interpolation) => {
                if passthrough_key(interpolation, from, keys).is_none() {
                    shape.push(Shape::Other);
                    continue;
                }
                if found {
                    return None;
                }
                found = true;
                shape.push(Shape::Passthrough);
            }
        }
    }
    found.then_some(shape)
}

/// `:from($p) { nom: "{$p:nom} x", acc: "{$p:acc} x" }` is `:from($p) "{$p} x"`.
fn redundant_passthrough_block(
    definition: &PhraseDefinition,
    language: &str,
    warnings: &mut Vec<LoadWarning>,
) {
    let Some((from, entries)) = from_block(definition) else {
        return;
    };
    let mut shapes = entries.iter().map(|e| passthrough_shape(&e.template, from, &e.keys));
    let Some(Some(first)) = shapes.next() else {
        return;
    };
    if shapes.all(|shape| shape.as_ref() == Some(&first)) {
        warnings.push(LoadWarning::RedundantPassthroughBlock {
            name: definition.name.clone(),
            language: language.to_string(),
        });
    }
}

/// `{$p:nom}` inside the `nom:` entry of a `:from($p)` block.
fn redundant_from_selector(
    definition: &PhraseDefinition,
    language: &str,
    warnings: &mut Vec<LoadWarning>,
) {
    let Some((from, entries)) = from_block(definition) else {
        return;
    };
    for entry in entries {
        for interpolation in entry.template.interpolations() {
            if let Some(key) = passthrough_key(interpolation, from, &entry.keys) {
                warnings.push(LoadWarning::RedundantFromSelector {
                    name: definition.name.clone(),
                    language: language.to_string(),
                    variant_key: key.to_string(),
                    parameter: from.to_string(),
                });
            }
        }
    }
}

/// A parameter read with a selector, in a phrase that neither declares tags
/// nor inherits them.
fn likely_missing_from(
    definition: &PhraseDefinition,
    language: &str,
    warnings: &mut Vec<LoadWarning>,
) {
    if definition.parameters.is_empty()
        || definition.from_param.is_some()
        || !definition.tags.is_empty()
    {
        return;
    }
    let parameter = definition
        .templates()
        .into_iter()
        .flat_map(Template::interpolations)
        .filter(|interpolation| !interpolation.selectors.is_empty())
        .find_map(|interpolation| first_parameter(&interpolation.reference));
    if let Some(parameter) = parameter {
        warnings.push(LoadWarning::LikelyMissingFrom {
            name: definition.name.clone(),
            language: language.to_string(),
            parameter: parameter.to_string(),
        });
    }
}

fn first_parameter(reference: &Reference) -> Option<&str> {
    match reference {
        Reference::Parameter(name) => Some(name.as_str()),
        Reference::Call { args, .. } => args.iter().find_map(|arg| match arg {
            Argument::Parameter(name) => Some(name.as_str()),
            Argument::Number(_) | Argument::Text(_) | Argument::Term(_) => None,
        }),
        Reference::Term(_) => None,
    }
}

/// `:from($p) "{$p}"`, which the body-less `:from($p);` already means.
fn verbose_transparent_wrapper(
    definition: &PhraseDefinition,
    language: &str,
    warnings: &mut Vec<LoadWarning>,
) {
    let Some(from) = &definition.from_param else {
        return;
    };
    let PhraseBody::Template(template) = &definition.body else {
        return;
    };
    if definition.bodyless {
        return;
    }
    let [Segment::Interpolation(interpolation)] = template.segments.as_slice() else {
        return;
    };
    let plain = interpolation.transform.is_none() && interpolation.selectors.is_empty();
    if plain && interpolation.reference == Reference::Parameter(from.clone()) {
        warnings.push(LoadWarning::VerboseTransparentWrapper {
            name: definition.name.clone(),
            language: language.to_string(),
            parameter: from.clone(),
        });
    }
}
