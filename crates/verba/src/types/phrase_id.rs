use std::fmt::{Display, Formatter, Result as FmtResult};

use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::{Deserialize, Serialize};

use super::{Phrase, Value};
use crate::interpreter::{EvalError, Locale};
use crate::scope::with_active;

/// A compact, serializable handle to a phrase.
///
/// A `PhraseId` is the 64-bit FNV-1a hash of the phrase name plus the
/// phrase's arity. It carries no locale: resolving it always goes through a
/// locale, by default the active one. This makes it suitable for storing in
/// serialized game state and rendering later in whatever language is active.
///
/// ```
/// use verba::PhraseId;
///
/// const CARD: PhraseId = PhraseId::from_name("card");
/// const DRAW: PhraseId = PhraseId::new("draw", 1);
///
/// assert_eq!(CARD.arity(), 0);
/// assert_eq!(DRAW.arity(), 1);
/// assert_ne!(CARD, DRAW);
/// ```
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct PhraseId {
    hash: u64,
    arity: u8,
}

impl PhraseId {
    pub const fn new(name: &str, arity: u8) -> Self {
        Self { hash: fnv1a_hash_str_64(name), arity }
    }

    /// Id of a phrase without parameters.
    pub const fn from_name(name: &str) -> Self {
        Self::new(name, 0)
    }

    /// The raw name hash.
    pub fn as_u64(&self) -> u64 {
        self.hash
    }

    pub fn arity(&self) -> u8 {
        self.arity
    }

    /// Evaluates a parameterless phrase in the active locale.
    pub fn resolve(&self) -> Result<Phrase, EvalError> {
        with_active(|locale| self.resolve_in(locale))
    }

    /// Calls the phrase with arguments in the active locale.
    pub fn call(&self, args: &[Value]) -> Result<Phrase, EvalError> {
        with_active(|locale| self.call_in(locale, args))
    }

    /// The phrase name, looked up in the active locale.
    pub fn name(&self) -> Result<String, EvalError> {
        with_active(|locale| {
            locale
                .name_for_id(*self)
                .map(str::to_string)
                .ok_or(EvalError::PhraseNotFoundById { id: self.hash })
        })
    }

    pub fn resolve_in(&self, locale: &Locale) -> Result<Phrase, EvalError> {
        locale.call_by_id(*self, &[])
    }

    pub fn call_in(&self, locale: &Locale, args: &[Value]) -> Result<Phrase, EvalError> {
        locale.call_by_id(*self, args)
    }
}

impl Display for PhraseId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "PhraseId({:016x})", self.hash)
    }
}
