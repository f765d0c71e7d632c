//! Static validation of a set of phrase definitions.
//!
//! Runs at macro expansion time and again when a locale is built, so a
//! locale that builds successfully can only fail at render time for reasons
//! that depend on argument values.

use std::collections::{BTreeMap, BTreeSet};

use crate::ast::{Argument, EntryKey, PhraseBody, PhraseDefinition, Reference, Selector, Template};
use crate::error::DefinitionError;
use crate::suggest::compute_suggestions;

/// Validates `definitions` against each other and against the transform
/// names available in the target language.
///
/// All problems are reported, in definition order, followed by at most one
/// cyclic reference.
pub fn validate(
    definitions: &[PhraseDefinition],
    transforms: &[&str],
) -> Result<(), Vec<DefinitionError>> {
    let mut errors = Vec::new();
    let mut arities: BTreeMap<&str, usize> = BTreeMap::new();
    for definition in definitions {
        if arities.insert(&definition.name, definition.arity()).is_some() {
            errors.push(DefinitionError::DuplicatePhrase { name: definition.name.clone() });
        }
    }

    let checker = Checker { arities: &arities, transforms };
    for definition in definitions {
        checker.definition(definition, &mut errors);
    }

    if let Some(chain) = find_cycle(definitions) {
        errors.push(DefinitionError::CyclicReference { chain });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

struct Checker<'a> {
    arities: &'a BTreeMap<&'a str, usize>,
    transforms: &'a [&'a str],
}

impl Checker<'_> {
    fn definition(&self, definition: &PhraseDefinition, errors: &mut Vec<DefinitionError>) {
        let phrase = definition.name.as_str();
        let parameters: BTreeSet<&str> = definition.parameters.iter().map(String::as_str).collect();
        let require_parameter = |name: &str, errors: &mut Vec<DefinitionError>| {
            if !parameters.contains(name) {
                errors.push(DefinitionError::UnknownParameter {
                    phrase: phrase.to_string(),
                    parameter: name.to_string(),
                });
            }
        };

        if let Some(from) = &definition.from_param {
            require_parameter(from, errors);
        }
        for name in &definition.match_params {
            require_parameter(name, errors);
        }

        match &definition.body {
            PhraseBody::Template(_) if !definition.match_params.is_empty() => {
                errors.push(DefinitionError::MatchWithoutArms { phrase: phrase.to_string() });
            }
            PhraseBody::Template(_) => {}
            PhraseBody::Variants(entries) => {
                let keys: Vec<&EntryKey> = entries.iter().flat_map(|e| &e.keys).collect();
                if definition.match_params.is_empty() {
                    variant_block(phrase, &keys, errors);
                } else {
                    match_arms(phrase, definition.match_params.len(), &keys, errors);
                }
            }
        }

        for template in definition.templates() {
            self.template(phrase, template, &require_parameter, errors);
        }
    }

    fn template(
        &self,
        phrase: &str,
        template: &Template,
        require_parameter: &impl Fn(&str, &mut Vec<DefinitionError>),
        errors: &mut Vec<DefinitionError>,
    ) {
        for interpolation in template.interpolations() {
            if let Some(transform) = &interpolation.transform {
                if !self.transforms.contains(&transform.name.as_str()) {
                    errors.push(DefinitionError::UnknownTransform {
                        phrase: phrase.to_string(),
                        transform: transform.name.clone(),
                        suggestions: compute_suggestions(&transform.name, self.transforms),
                    });
                }
                if let Some(Selector::Parameter(name)) = &transform.context {
                    require_parameter(name, errors);
                }
            }

            match &interpolation.reference {
                Reference::Parameter(name) => require_parameter(name, errors),
                Reference::Term(name) => self.call(phrase, name, 0, errors),
                Reference::Call { name, args } => {
                    self.call(phrase, name, args.len(), errors);
                    for arg in args {
                        match arg {
                            Argument::Parameter(name) => require_parameter(name, errors),
                            Argument::Term(name) => self.call(phrase, name, 0, errors),
                            Argument::Number(_) | Argument::Text(_) => {}
                        }
                    }
                }
            }

            for selector in &interpolation.selectors {
                if let Selector::Parameter(name) = selector {
                    require_parameter(name, errors);
                }
            }
        }
    }

    fn call(&self, phrase: &str, callee: &str, got: usize, errors: &mut Vec<DefinitionError>) {
        match self.arities.get(callee) {
            Some(&expected) if expected != got => errors.push(DefinitionError::ArgumentCount {
                phrase: phrase.to_string(),
                callee: callee.to_string(),
                expected,
                got,
            }),
            Some(_) => {}
            None => {
                let known: Vec<&str> = self.arities.keys().copied().collect();
                errors.push(DefinitionError::UnknownPhrase {
                    phrase: phrase.to_string(),
                    reference: callee.to_string(),
                    suggestions: compute_suggestions(callee, &known),
                });
            }
        }
    }
}

/// Checks the keys of a plain variant block: no `*` other than a single
/// leading default marker, and an `other` entry.
fn variant_block(phrase: &str, keys: &[&EntryKey], errors: &mut Vec<DefinitionError>) {
    let mut defaults = 0;
    for key in keys {
        let misplaced = key.parts.iter().enumerate().any(|(i, part)| {
            part.is_wildcard() && (i > 0 || part.label().is_none())
        });
        if misplaced {
            errors.push(DefinitionError::WildcardOutsideMatch {
                phrase: phrase.to_string(),
                key: key.to_string(),
            });
        }
        if key.is_default_marker() {
            defaults += 1;
        }
    }
    if defaults > 1 {
        errors.push(DefinitionError::MultipleDefaults { phrase: phrase.to_string() });
    }
    let has_other = keys.iter().any(|key| key.variant_key().rsplit('.').next() == Some("other"));
    if !has_other {
        errors.push(DefinitionError::MissingOtherVariant { phrase: phrase.to_string() });
    }
}

/// Checks that every arm has one part per `:match` parameter. A lone `*` is
/// accepted as a catch-all for any arity.
fn match_arms(phrase: &str, arity: usize, keys: &[&EntryKey], errors: &mut Vec<DefinitionError>) {
    for key in keys {
        let lone_star = key.parts.len() == 1 && key.is_catch_all();
        if key.parts.len() != arity && !lone_star {
            errors.push(DefinitionError::MatchArity {
                phrase: phrase.to_string(),
                key: key.to_string(),
                expected: arity,
                got: key.parts.len(),
            });
        }
    }
}

// ============================================================================
// Cycle detection
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    /// On the current DFS path.
    Gray,
    /// Fully explored.
    Black,
}

/// Finds a cycle in the phrase reference graph, e.g. `a -> b -> a`.
///
/// Traversal is in name order so the reported chain is deterministic.
fn find_cycle(definitions: &[PhraseDefinition]) -> Option<Vec<String>> {
    let graph: BTreeMap<&str, BTreeSet<&str>> = definitions
        .iter()
        .map(|definition| (definition.name.as_str(), references(definition)))
        .collect();
    let mut colors: BTreeMap<&str, Color> = BTreeMap::new();
    let mut path = Vec::new();
    graph.keys().find_map(|&name| {
        if colors.contains_key(name) {
            None
        } else {
            visit(name, &graph, &mut colors, &mut path)
        }
    })
}

fn visit<'a>(
    name: &'a str,
    graph: &BTreeMap<&'a str, BTreeSet<&'a str>>,
    colors: &mut BTreeMap<&'a str, Color>,
    path: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    colors.insert(name, Color::Gray);
    path.push(name);

    for &next in graph.get(name).into_iter().flatten() {
        match colors.get(next) {
            Some(Color::Gray) => {
                let start = path.iter().position(|n| *n == next).unwrap_or(0);
                let mut chain: Vec<String> =
                    path[start..].iter().map(|n| (*n).to_string()).collect();
                chain.push(next.to_string());
                return Some(chain);
            }
            Some(Color::Black) => {}
            None if graph.contains_key(next) => {
                if let Some(chain) = visit(next, graph, colors, path) {
                    return Some(chain);
                }
            }
            None => {}
        }
    }

    path.pop();
    colors.insert(name, Color::Black);
    None
}

/// Phrase names referenced anywhere in a definition's body.
fn references(definition: &PhraseDefinition) -> BTreeSet<&str> {
    let mut names = BTreeSet::new();
    for template in definition.templates() {
        for interpolation in template.interpolations() {
            if let Some(name) = interpolation.reference.phrase_name() {
                names.insert(name);
            }
            if let Reference::Call { args, .. } = &interpolation.reference {
                for arg in args {
                    if let Argument::Term(name) = arg {
                        names.insert(name.as_str());
                    }
                }
            }
        }
    }
    names
}
