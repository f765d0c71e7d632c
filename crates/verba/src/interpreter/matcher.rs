//! Arm selection for `:match`.
//!
//! Each selector value yields an ordered list of candidate keys. Selection
//! then runs in three phases and the first hit wins:
//!
//! 1. Exact: candidate tuples in priority order (first selector outermost),
//!    against arms whose parts are all concrete. `*name` counts as `name`.
//! 2. Wildcard: arms with at least one wildcard and one concrete part, in
//!    declaration order, when every concrete part is a candidate at its
//!    position.
//! 3. Catch-all: the first arm whose parts are all wildcards. A single
//!    wildcard part catches any number of selectors.

use verba_syntax::{EntryKey, KeyPart, Template, VariantEntry};

use super::plural::PluralCategory;
use crate::types::Value;

/// Candidate keys for one selector value, most specific first.
///
/// Numbers offer themselves and then their plural category. Text offers
/// itself, plus a category if it parses as an integer. Phrases offer their
/// tags in order.
pub fn candidates(value: &Value, category: impl Fn(i64) -> PluralCategory) -> Vec<String> {
    match value {
        Value::Number(n) => vec![n.to_string(), category(*n).as_str().to_string()],
        Value::Text(text) => {
            let mut keys = vec![text.clone()];
            if let Some(n) = value.numeric() {
                keys.push(category(n).as_str().to_string());
            }
            keys
        }
        Value::Phrase(phrase) => phrase.tags().iter().map(ToString::to_string).collect(),
    }
}

/// Selects the arm for the given candidates, or `None` if nothing matches.
pub fn select<'e>(entries: &'e [VariantEntry], candidates: &[Vec<String>]) -> Option<&'e Template> {
    let all = entries
        .iter()
        .flat_map(|entry| entry.keys.iter().map(move |key| (key, &entry.template)))
        .collect::<Vec<_>>();
    let arms = all
        .iter()
        .filter(|(key, _)| key.parts.len() == candidates.len())
        .collect::<Vec<_>>();

    for tuple in tuples(candidates) {
        let exact = arms.iter().find(|(key, _)| {
            key.parts.iter().zip(&tuple).all(|(part, candidate)| part.label() == Some(*candidate))
        });
        if let Some((_, template)) = exact {
            return Some(*template);
        }
    }

    let wildcard = arms
        .iter()
        .filter(|(key, _)| key.has_wildcard() && !key.is_catch_all())
        .find(|(key, _)| matches_with_wildcards(key, candidates));
    if let Some((_, template)) = wildcard {
        return Some(*template);
    }

    // A lone `*` or `*other` catches everything whatever the selector count.
    all.iter()
        .filter(|(key, _)| key.parts.len() == candidates.len() || key.parts.len() == 1)
        .find(|(key, _)| key.is_catch_all())
        .map(|(_, template)| *template)
}

fn matches_with_wildcards(key: &EntryKey, candidates: &[Vec<String>]) -> bool {
    key.parts.iter().zip(candidates).all(|(part, keys)| match part {
        KeyPart::Wildcard(_) => true,
        KeyPart::Literal(label) => keys.contains(label),
    })
}

/// The cartesian product of the candidate lists, first position outermost.
fn tuples(candidates: &[Vec<String>]) -> Vec<Vec<&str>> {
    let mut tuples: Vec<Vec<&str>> = vec![Vec::new()];
    for keys in candidates {
        tuples = tuples
            .iter()
            .flat_map(|prefix| {
                keys.iter().map(move |key| {
                    let mut tuple = prefix.clone();
                    tuple.push(key.as_str());
                    tuple
                })
            })
            .collect();
    }
    tuples
}
