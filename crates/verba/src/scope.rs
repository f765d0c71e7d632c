//! The active locale.
//!
//! Phrase functions generated by `verba!`, [`PhraseId`](crate::PhraseId)
//! methods and [`eval_str`] render against the *active* locale: the
//! innermost [`with_locale`] scope on the current thread, else the published
//! default. The default is swapped atomically, so readers always see a
//! complete locale.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::{info, trace};

use crate::interpreter::{EvalError, Locale};
use crate::types::Value;

static DEFAULT_LOCALE: ArcSwapOption<Locale> = ArcSwapOption::const_empty();

thread_local! {
    /// Scoped overrides on this thread, innermost last.
    static SCOPES: RefCell<Vec<Arc<Locale>>> = const { RefCell::new(Vec::new()) };
}

/// Publishes `locale` as the process-wide default and returns a handle to it.
///
/// Build the locale completely before publishing. A locale that failed to
/// build never replaces the current default.
pub fn publish_default(locale: Locale) -> Arc<Locale> {
    let locale = Arc::new(locale);
    DEFAULT_LOCALE.store(Some(Arc::clone(&locale)));
    info!(language = locale.language(), "published default locale");
    locale
}

/// Removes the process-wide default.
pub fn clear_default() {
    DEFAULT_LOCALE.store(None);
}

pub fn default_locale() -> Option<Arc<Locale>> {
    DEFAULT_LOCALE.load_full()
}

/// Pops the scope it guards, including during unwinding.
struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let popped = SCOPES.with_borrow_mut(Vec::pop);
        if let Some(locale) = popped {
            trace!(language = locale.language(), "left locale scope");
        }
    }
}

/// Runs `f` with `locale` active on this thread. Scopes nest.
///
/// ```
/// use std::sync::Arc;
/// use verba::{Locale, active_locale, with_locale};
///
/// let pt = Arc::new(Locale::builder().language("pt").source("").build().unwrap());
/// let language = with_locale(&pt, || active_locale().unwrap().language().to_string());
/// assert_eq!(language, "pt");
/// ```
pub fn with_locale<T>(locale: &Arc<Locale>, f: impl FnOnce() -> T) -> T {
    SCOPES.with_borrow_mut(|scopes| scopes.push(Arc::clone(locale)));
    let _guard = ScopeGuard;
    trace!(language = locale.language(), "entered locale scope");
    f()
}

/// The innermost scoped locale, else the published default.
pub fn active_locale() -> Result<Arc<Locale>, EvalError> {
    SCOPES
        .with_borrow(|scopes| scopes.last().cloned())
        .or_else(default_locale)
        .ok_or(EvalError::NoActiveLocale)
}

/// Runs `f` against the active locale.
pub fn with_active<T>(f: impl FnOnce(&Locale) -> Result<T, EvalError>) -> Result<T, EvalError> {
    let locale = active_locale()?;
    f(&locale)
}

/// Parses and renders a template against the active locale.
pub fn eval_str(template: &str, params: &HashMap<String, Value>) -> Result<String, EvalError> {
    with_active(|locale| locale.eval_str(template, params))
}
