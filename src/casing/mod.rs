//! The casing engine: preprocess, tokenize, apply the rules, render.

mod author;
mod preprocess;
mod punctuation;
mod render;
mod rules;
mod token;
mod tokenizer;

pub use author::AuthorName;

use crate::{Locale, RuleTables};

use token::Token;

/// Run every stage up to and including the rules engine.
fn cased_tokens(text: &str, locale: Locale, tables: &RuleTables) -> Vec<Token> {
    let cleaned = preprocess::preprocess(text);
    log::debug!("preprocessed {text:?} -> {cleaned:?}");
    if cleaned.is_empty() {
        return Vec::new();
    }
    let mut tokens = tokenizer::tokenize(&cleaned, tables);
    rules::apply(&mut tokens, locale, tables);
    tokens
}

/// Title-case `text`.
pub fn title(text: &str, locale: Locale, tables: &RuleTables) -> String {
    let tokens = cased_tokens(text, locale, tables);
    let output = render::render(&tokens);
    log::debug!("title {text:?} -> {output:?} ({locale})");
    output
}

/// Case `text` as a personal name and split it into fields.
///
/// The returned string leaves out what segmentation moved into the title
/// and suffix fields.
pub fn author(text: &str, locale: Locale, tables: &RuleTables) -> (String, AuthorName) {
    let mut tokens = cased_tokens(text, locale, tables);
    let name = author::segment(&mut tokens, tables);
    let output = render::trim_dangling_commas(&render::render(&tokens)).to_string();
    log::debug!("author {text:?} -> {output:?} ({locale})");
    (output, name)
}

#[cfg(test)]
mod tests;
