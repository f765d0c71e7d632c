//! Error types for locale loading and phrase evaluation.

use thiserror::Error;
use verba_syntax::{DefinitionError, ParseError};

use crate::types::VariantError;

/// Errors that occur while building a [`Locale`](super::Locale).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The source parsed but its definitions are inconsistent.
    #[error("invalid definitions for '{language}':\n{}", list(errors))]
    Invalid { language: String, errors: Vec<DefinitionError> },

    #[error("invalid language identifier '{language}'")]
    InvalidLanguage { language: String },

    /// Two phrase names hash to the same `PhraseId`.
    #[error("phrase id collision: '{first}' and '{second}' produce the same hash")]
    IdCollision { first: String, second: String },
}

/// An error that occurred during phrase evaluation.
///
/// Any error aborts the whole call. No partially rendered text is returned.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("phrase '{name}' not found in locale '{language}'")]
    PhraseNotFound { name: String, language: String },

    #[error("phrase not found for id: {id:016x}")]
    PhraseNotFoundById { id: u64 },

    #[error("phrase '{phrase}' expects {expected} argument(s), got {got}")]
    ArgumentCount { phrase: String, expected: usize, got: usize },

    #[error("missing parameter '${name}'")]
    MissingParameter { name: String },

    /// No `:match` arm accepts the selector values.
    #[error("phrase '{phrase}' has no arm matching ({})", values.join(", "))]
    NoMatchingVariant { phrase: String, values: Vec<String> },

    /// A transform needs one of `expected` on its value.
    #[error(
        "transform '@{transform}' requires one of the tags [{}] on '{value}'",
        expected.join(", ")
    )]
    MissingTag { transform: String, expected: Vec<String>, value: String },

    /// The value carries tags the transform cannot combine.
    #[error("transform '@{transform}' cannot handle the tag combination [{}]", tags.join(", "))]
    UnsupportedTagCombination { transform: String, tags: Vec<String> },

    #[error("transform '@{transform}' does not accept the context '{context}'")]
    InvalidTransformContext { transform: String, context: String },

    /// A `:$param` selector received a phrase with no tags to select by.
    #[error("selector '${parameter}' received '{value}', which has no tags")]
    UntaggedSelector { parameter: String, value: String },

    #[error("unknown transform '@{name}'")]
    UnknownTransform { name: String },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Variants(#[from] VariantError),

    #[error("no active locale: publish a default or enter a locale scope")]
    NoActiveLocale,
}

/// A non-fatal problem found by checking a translation against its source
/// language or by linting definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// The translation defines a phrase the source language does not.
    #[error("warning: phrase '{name}' in '{language}' is not defined in the source language")]
    UnknownPhrase { name: String, language: String },

    #[error(
        "warning: phrase '{name}' in '{language}' takes {translation_count} parameter(s) \
         but the source takes {source_count}"
    )]
    ParameterCountMismatch {
        name: String,
        language: String,
        source_count: usize,
        translation_count: usize,
    },

    /// Every entry of a `:from` variant block passes its own key through.
    #[error(
        "warning: phrase '{name}' in '{language}' has redundant passthrough variant block; \
         use simple :from template instead"
    )]
    RedundantPassthroughBlock { name: String, language: String },

    #[error(
        "warning: phrase '{name}' in '{language}' has redundant selector ':{variant_key}' on \
         :from parameter '${parameter}'; bare '{{${parameter}}}' resolves to the same value"
    )]
    RedundantFromSelector {
        name: String,
        language: String,
        variant_key: String,
        parameter: String,
    },

    /// A parameter is read with a selector but nothing propagates its tags.
    #[error(
        "warning: phrase '{name}' in '{language}' uses parameter '${parameter}' without :from; \
         tags and variants may be lost"
    )]
    LikelyMissingFrom { name: String, language: String, parameter: String },

    #[error(
        "warning: phrase '{name}' in '{language}' uses ':from(${parameter}) \"{{${parameter}}}\"'; \
         use body-less ':from(${parameter});' instead"
    )]
    VerboseTransparentWrapper { name: String, language: String, parameter: String },
}

fn list(errors: &[DefinitionError]) -> String {
    errors.iter().map(|e| format!("  {e}")).collect::<Vec<_>>().join("\n")
}
