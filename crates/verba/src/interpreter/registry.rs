//! Phrase table for storing and looking up definitions.

use std::collections::{BTreeMap, HashMap};

use verba_syntax::PhraseDefinition;

use crate::interpreter::LoadError;
use crate::types::PhraseId;

/// The definitions of one locale, looked up by name or by [`PhraseId`].
#[derive(Debug, Default)]
pub struct PhraseTable {
    phrases: BTreeMap<String, PhraseDefinition>,
    /// Name hash to name.
    names_by_id: HashMap<u64, String>,
}

impl PhraseTable {
    pub fn get(&self, name: &str) -> Option<&PhraseDefinition> {
        self.phrases.get(name)
    }

    pub fn get_by_id(&self, id: PhraseId) -> Option<&PhraseDefinition> {
        self.name_for(id).and_then(|name| self.phrases.get(name))
    }

    pub fn name_for(&self, id: PhraseId) -> Option<&str> {
        self.names_by_id.get(&id.as_u64()).map(String::as_str)
    }

    /// Inserts a definition.
    ///
    /// Returns an error if another name already produced the same hash.
    pub fn insert(&mut self, definition: PhraseDefinition) -> Result<(), LoadError> {
        let hash = PhraseId::from_name(&definition.name).as_u64();
        match self.names_by_id.get(&hash) {
            Some(existing) if *existing != definition.name => {
                return Err(LoadError::IdCollision {
                    first: existing.clone(),
                    second: definition.name,
                });
            }
            Some(_) | None => {}
        }
        self.names_by_id.insert(hash, definition.name.clone());
        self.phrases.insert(definition.name.clone(), definition);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.phrases.contains_key(name)
    }

    /// Names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.phrases.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &PhraseDefinition> {
        self.phrases.values()
    }
}
