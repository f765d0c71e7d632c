//! Code generation for the verba! macro.
//!
//! For each phrase the expansion contains:
//! - a function rendering the phrase against the active locale
//! - a `PhraseId` constant in the `phrase_ids` module
//!
//! plus the embedded `SOURCE` and `LANGUAGE` and a `locale()` constructor.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use verba_syntax::PhraseDefinition;

use crate::input::MacroInput;

pub fn codegen(input: &MacroInput, definitions: &[PhraseDefinition]) -> TokenStream {
    let functions = definitions.iter().map(generate_function);
    let phrase_ids = generate_phrase_ids(definitions);
    let source = input.source();
    let language = &input.language;

    quote! {
        #(#functions)*

        #phrase_ids

        /// The phrase definitions of this block, as source text.
        pub const SOURCE: &str = #source;

        /// The language the definitions of this block are written in.
        pub const LANGUAGE: &str = #language;

        /// Builds a locale from the definitions of this block.
        pub fn locale() -> ::core::result::Result<::verba::Locale, ::verba::LoadError> {
            ::verba::Locale::builder().language(LANGUAGE).source(SOURCE).build()
        }
    }
}

/// `pub fn name(a: impl Into<Value>, ...) -> Result<Phrase, EvalError>`
fn generate_function(definition: &PhraseDefinition) -> TokenStream {
    let name = &definition.name;
    let fn_name = rust_ident(name);
    let doc = format!("Renders the `{name}` phrase against the active locale.");

    let params: Vec<Ident> = definition.parameters.iter().map(|p| rust_ident(p)).collect();
    // Kept apart from parameter names by hygiene.
    let locale = Ident::new("locale", Span::mixed_site());

    quote! {
        #[doc = #doc]
        pub fn #fn_name(#(#params: impl ::core::convert::Into<::verba::Value>),*)
            -> ::core::result::Result<::verba::Phrase, ::verba::EvalError>
        {
            ::verba::with_active(|#locale| #locale.call(#name, &[#(#params.into()),*]))
        }
    }
}

fn generate_phrase_ids(definitions: &[PhraseDefinition]) -> TokenStream {
    let constants = definitions.iter().map(|definition| {
        let name = &definition.name;
        let constant = format_ident!("{}", name.to_uppercase());
        let arity = u8::try_from(definition.arity()).unwrap_or(u8::MAX);
        let doc = format!("Id of the `{name}` phrase.");
        quote! {
            #[doc = #doc]
            pub const #constant: ::verba::PhraseId = ::verba::PhraseId::new(#name, #arity);
        }
    });

    quote! {
        /// Stable ids for the phrases of this block.
        pub mod phrase_ids {
            #(#constants)*
        }
    }
}

/// A keyword becomes a raw identifier.
fn rust_ident(name: &str) -> Ident {
    if syn::parse_str::<Ident>(name).is_ok() {
        Ident::new(name, Span::call_site())
    } else {
        Ident::new_raw(name, Span::call_site())
    }
}
