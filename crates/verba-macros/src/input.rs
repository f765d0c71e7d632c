//! Macro input: the definition source rebuilt from tokens.
//!
//! The macro body is ordinary verba definition syntax. Rather than parsing
//! it a second time with syn, the tokens are rendered back to source text,
//! one definition per line, and handed to the shared `verba-syntax` parser.
//! Each rendered token remembers its span so parser positions can be mapped
//! back onto the user's code.

use std::mem;

use proc_macro2::{Delimiter, Group, Span, TokenStream, TokenTree};
use syn::{Expr, ExprLit, Lit, MetaNameValue};
use verba_syntax::Position;

/// Language used when the block has no `#![language = "..."]` header.
const DEFAULT_LANGUAGE: &str = "en";

pub struct MacroInput {
    pub language: String,
    pub lines: Vec<SourceLine>,
}

/// One rendered definition.
#[derive(Default)]
pub struct SourceLine {
    pub text: String,
    /// Starting column (1-based, in chars) and span of each rendered token.
    tokens: Vec<(usize, Span)>,
    /// Whether the last token rendered was an identifier or literal.
    after_word: bool,
}

impl MacroInput {
    pub fn parse(tokens: TokenStream) -> syn::Result<Self> {
        let mut language = DEFAULT_LANGUAGE.to_string();
        let mut lines = Vec::new();
        let mut current = SourceLine::default();

        let mut iter = tokens.into_iter().peekable();
        while let Some(token) = iter.next() {
            match &token {
                TokenTree::Punct(punct) if punct.as_char() == '#' && current.is_empty() => {
                    let inner =
                        matches!(iter.peek(), Some(TokenTree::Punct(p)) if p.as_char() == '!');
                    if inner {
                        iter.next();
                    }
                    let attribute = match iter.next() {
                        Some(TokenTree::Group(g)) if g.delimiter() == Delimiter::Bracket => g,
                        _ => return Err(syn::Error::new(punct.span(), "expected an attribute")),
                    };
                    if inner {
                        language = language_attribute(&attribute)?;
                    }
                }
                TokenTree::Punct(punct) if punct.as_char() == ';' => {
                    current.push(";", punct.span());
                    lines.push(mem::take(&mut current));
                }
                _ => current.render(token)?,
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        Ok(MacroInput { language, lines })
    }

    /// The rebuilt definition source.
    pub fn source(&self) -> String {
        self.lines.iter().map(|line| line.text.as_str()).collect::<Vec<_>>().join("\n")
    }

    /// The primary language subtag, which selects the built-in transforms.
    pub fn base_language(&self) -> &str {
        self.language.split(['-', '_']).next().unwrap_or(&self.language)
    }

    /// The span of the token at a parser position.
    pub fn span_at(&self, position: Position) -> Span {
        let Some(line) = position.line.checked_sub(1).and_then(|index| self.lines.get(index)) else {
            return self.lines.last().map_or_else(Span::call_site, SourceLine::last_span);
        };
        line.tokens
            .iter()
            .rev()
            .find(|(column, _)| *column <= position.column)
            .map_or_else(|| line.first_span(), |(_, span)| *span)
    }
}

impl SourceLine {
    fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn first_span(&self) -> Span {
        self.tokens.first().map_or_else(Span::call_site, |(_, span)| *span)
    }

    fn last_span(&self) -> Span {
        self.tokens.last().map_or_else(Span::call_site, |(_, span)| *span)
    }

    fn push(&mut self, text: &str, span: Span) {
        self.tokens.push((self.text.chars().count() + 1, span));
        self.text.push_str(text);
    }

    /// Identifiers and literals need a separator from a preceding word.
    fn push_word(&mut self, text: &str, span: Span) {
        if self.after_word {
            self.text.push(' ');
        }
        self.push(text, span);
        self.after_word = true;
    }

    fn render(&mut self, token: TokenTree) -> syn::Result<()> {
        match token {
            TokenTree::Ident(ident) => {
                let text = ident.to_string();
                let name = text.strip_prefix("r#").unwrap_or(&text);
                self.push_word(name, ident.span());
            }
            TokenTree::Literal(literal) => {
                let text = match Lit::new(literal.clone()) {
                    Lit::Str(string) => quote_string(&string.value()),
                    Lit::Int(int) => int.base10_digits().to_string(),
                    _ => {
                        return Err(syn::Error::new(
                            literal.span(),
                            "expected a string or integer literal",
                        ));
                    }
                };
                self.push_word(&text, literal.span());
            }
            TokenTree::Punct(punct) => {
                self.push(&punct.as_char().to_string(), punct.span());
                self.after_word = false;
            }
            TokenTree::Group(group) => self.render_group(&group)?,
        }
        Ok(())
    }

    fn render_group(&mut self, group: &Group) -> syn::Result<()> {
        let (open, close) = match group.delimiter() {
            Delimiter::Parenthesis => ("(", ")"),
            Delimiter::Brace => ("{", "}"),
            Delimiter::Bracket => ("[", "]"),
            Delimiter::None => ("", ""),
        };
        self.push(open, group.span_open());
        self.after_word = false;
        for token in group.stream() {
            self.render(token)?;
        }
        self.push(close, group.span_close());
        self.after_word = false;
        Ok(())
    }
}

/// Reads the value of `#![language = "xx"]`.
fn language_attribute(attribute: &Group) -> syn::Result<String> {
    let meta: MetaNameValue = syn::parse2(attribute.stream())?;
    if !meta.path.is_ident("language") {
        return Err(syn::Error::new_spanned(&meta.path, "unknown attribute, expected `language`"));
    }
    match &meta.value {
        Expr::Lit(ExprLit { lit: Lit::Str(language), .. }) => Ok(language.value()),
        other => Err(syn::Error::new_spanned(other, "expected a language string such as \"en\"")),
    }
}

/// Quotes a string value using the escapes the definition parser reads.
fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
