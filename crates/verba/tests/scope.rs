//! The active locale: published default and scoped overrides.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use verba::{
    EvalError, Locale, PhraseId, active_locale, clear_default, default_locale, eval_str, params,
    publish_default, with_active, with_locale,
};

fn build(language: &str, source: &str) -> Arc<Locale> {
    Arc::new(Locale::builder().language(language).source(source).build().unwrap())
}

fn active_language() -> String {
    active_locale().unwrap().language().to_string()
}

// The only test that touches the process-wide default.
#[test]
fn published_default_is_shared_across_threads() {
    clear_default();
    assert!(matches!(active_locale(), Err(EvalError::NoActiveLocale)));

    let locale = Locale::builder()
        .language("en")
        .source(r#"greeting = "hello";"#)
        .build()
        .unwrap();
    let published = publish_default(locale);
    assert_eq!(default_locale().unwrap().language(), published.language());

    let text = thread::spawn(|| with_active(|locale| locale.term("greeting")).unwrap().to_string())
        .join()
        .unwrap();
    assert_eq!(text, "hello");

    let pt = build("pt", r#"greeting = "olá";"#);
    with_locale(&pt, || {
        assert_eq!(eval_str("{greeting}!", &params! {}).unwrap(), "olá!");
    });
    assert_eq!(eval_str("{greeting}!", &params! {}).unwrap(), "hello!");

    clear_default();
    assert!(default_locale().is_none());
}

#[test]
fn scopes_nest_and_unwind() {
    let en = build("en", "");
    let es = build("es", "");
    with_locale(&en, || {
        assert_eq!(active_language(), "en");
        with_locale(&es, || assert_eq!(active_language(), "es"));
        assert_eq!(active_language(), "en");
    });
}

#[test]
fn scope_is_popped_on_panic() {
    let en = build("en", "");
    let fr = build("fr", "");
    with_locale(&en, || {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            with_locale(&fr, || panic!("render failed"));
        }));
        assert!(result.is_err());
        assert_eq!(active_language(), "en");
    });
}

#[test]
fn scopes_are_per_thread() {
    let de = build("de", "");
    with_locale(&de, || {
        let other = thread::spawn(|| active_locale().map(|l| l.language().to_string()).ok())
            .join()
            .unwrap();
        assert_ne!(other.as_deref(), Some("de"));
    });
}

#[test]
fn phrase_ids_resolve_against_the_scope() {
    let en = build("en", r#"fire = "Fire"; damage($n) = "{$n} damage";"#);
    let es = build("es", r#"fire = "Fuego"; damage($n) = "{$n} de daño";"#);
    let fire = PhraseId::new("fire", 0);
    let damage = PhraseId::new("damage", 1);

    with_locale(&en, || {
        assert_eq!(fire.resolve().unwrap().to_string(), "Fire");
        assert_eq!(damage.call(&[2.into()]).unwrap().to_string(), "2 damage");
    });
    with_locale(&es, || {
        assert_eq!(fire.resolve().unwrap().to_string(), "Fuego");
        assert_eq!(damage.call(&[2.into()]).unwrap().to_string(), "2 de daño");
        assert_eq!(damage.name().unwrap(), "damage");
    });
}
