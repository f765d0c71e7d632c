use proc_macro::TokenStream;

mod codegen;
mod input;
mod validate;

/// The verba! macro for defining localized phrases.
///
/// Parses phrase definitions and generates typed Rust functions with
/// compile-time validation. A `#![language = "xx"]` header selects the
/// language of the block (default `en`), which decides the transforms the
/// definitions may use.
///
/// # Generated Code
///
/// For each phrase, the macro generates:
/// - A function with the phrase name that renders it against the active
///   locale and returns `Result<::verba::Phrase, ::verba::EvalError>`
/// - A constant in the `phrase_ids` module with SCREAMING_CASE name
///
/// Additionally generates:
/// - `SOURCE` and `LANGUAGE` consts with the embedded definitions
/// - `locale()`, which builds a `::verba::Locale` from them
///
/// # Example
///
/// ```ignore
/// verba! {
///     card = :a { one: "card", other: "cards" };
///     draw($n) = "Draw {$n} {card:$n}.";
/// }
///
/// // Generated: pub fn card() -> Result<Phrase, EvalError>
/// // Generated: pub fn draw(n: impl Into<Value>) -> Result<Phrase, EvalError>
/// // Generated: pub mod phrase_ids { pub const CARD: PhraseId = ...; ... }
/// ```
#[proc_macro]
pub fn verba(input: TokenStream) -> TokenStream {
    let input = match input::MacroInput::parse(input.into()) {
        Ok(input) => input,
        Err(e) => return e.to_compile_error().into(),
    };

    let definitions = match validate::check(&input) {
        Ok(definitions) => definitions,
        Err(e) => return e.to_compile_error().into(),
    };

    codegen::codegen(&input, &definitions).into()
}
