//! Compile-time validation.
//!
//! Definitions are parsed and validated with the same code the runtime uses
//! when building a locale. Errors are reported at the span of the offending
//! token or definition.

use std::collections::BTreeMap;

use proc_macro2::Span;
use verba_syntax::{
    DefinitionError, PhraseDefinition, Position, accepted_transform_names, parse_file, validate,
};

use crate::input::MacroInput;

/// Names the macro generates alongside the phrase functions.
const RESERVED: &[&str] = &["locale", "phrase_ids"];

/// Keywords that cannot be written as raw identifiers.
const UNUSABLE: &[&str] = &["self", "super", "crate"];

/// Parses and validates the macro input, returning the definitions.
pub fn check(input: &MacroInput) -> syn::Result<Vec<PhraseDefinition>> {
    let definitions = parse_file(&input.source())
        .map_err(|error| syn::Error::new(input.span_at(error.position()), error.to_string()))?;

    let transforms = accepted_transform_names(input.base_language());
    if let Err(errors) = validate(&definitions, &transforms) {
        return Err(combine(errors.iter().map(|error| {
            let span = input.span_at(definition_position(&definitions, error));
            syn::Error::new(span, error.to_string())
        })));
    }

    let mut errors = Vec::new();
    let mut constants = BTreeMap::new();
    for definition in &definitions {
        let name = definition.name.as_str();
        let span = input.span_at(definition.position);
        if RESERVED.contains(&name) || UNUSABLE.contains(&name) {
            errors.push(syn::Error::new(span, format!("'{name}' cannot be used as a phrase name")));
        }
        for parameter in &definition.parameters {
            if UNUSABLE.contains(&parameter.as_str()) {
                errors.push(syn::Error::new(
                    span,
                    format!("'${parameter}' cannot be used as a parameter name"),
                ));
            }
        }
        if let Some(previous) = constants.insert(name.to_uppercase(), name) {
            errors.push(syn::Error::new(
                span,
                format!("phrases '{previous}' and '{name}' map to the same phrase id constant"),
            ));
        }
        if u8::try_from(definition.arity()).is_err() {
            errors.push(syn::Error::new(
                span,
                format!("phrase '{name}' has more than {} parameters", u8::MAX),
            ));
        }
    }
    if !errors.is_empty() {
        return Err(combine(errors));
    }
    Ok(definitions)
}

/// Where the definition an error names starts. A duplicate is reported at
/// its last occurrence.
fn definition_position(
    definitions: &[PhraseDefinition],
    error: &DefinitionError,
) -> Position {
    let phrase = error.phrase();
    let found = match error {
        DefinitionError::DuplicatePhrase { .. } => {
            definitions.iter().rev().find(|d| d.name == phrase)
        }
        _ => definitions.iter().find(|d| d.name == phrase),
    };
    found.map_or(Position::START, |d| d.position)
}

fn combine(errors: impl IntoIterator<Item = syn::Error>) -> syn::Error {
    let mut errors = errors.into_iter();
    let Some(mut combined) = errors.next() else {
        return syn::Error::new(Span::call_site(), "invalid definitions");
    };
    for error in errors {
        combined.combine(error);
    }
    combined
}
