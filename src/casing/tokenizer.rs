//! Splitting normalized text into tokens.

use super::punctuation::{is_apostrophe, is_punctuation, is_sentence_punctuation};
use super::token::{Separator, Token};
use crate::RuleTables;

/// Split preprocessed text into tokens and mark sentence boundaries.
///
/// Whitespace, `-` and `/` end a word; square and curly brackets are
/// read as parentheses.  Consecutive separators collapse, so a separator
/// with no word before it is dropped.
pub fn tokenize(text: &str, tables: &RuleTables) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word: Vec<char> = Vec::new();

    for ch in text.chars() {
        let separator = match ch {
            c if c <= ' ' => Some(Separator::Space),
            '-' => Some(Separator::Hyphen),
            '/' => Some(Separator::Slash),
            _ => None,
        };
        if let Some(separator) = separator {
            if !word.is_empty() {
                add_word(&word, separator, tables, &mut tokens);
                word.clear();
            }
            continue;
        }
        word.push(match ch {
            '[' | '{' => '(',
            ']' | '}' => ')',
            c => c,
        });
    }
    if !word.is_empty() {
        add_word(&word, Separator::Terminal, tables, &mut tokens);
    }

    mark_boundaries(&mut tokens);
    tokens
}

/// Turn one buffered word into one or more tokens.
///
/// Sentence punctuation between letters splits the word at its first
/// occurrence (`mr.smith` becomes `mr.` and `smith`), unless the whole
/// word is a known honorific such as `ph.d`.
fn add_word(word: &[char], separator: Separator, tables: &RuleTables, tokens: &mut Vec<Token>) {
    let start = word
        .iter()
        .position(|&c| !is_punctuation(c))
        .unwrap_or(word.len());
    let end = word[start..]
        .iter()
        .rposition(|&c| !is_punctuation(c))
        .map_or(start, |i| start + i + 1);
    let (leading, interior, trailing) = (&word[..start], &word[start..end], &word[end..]);

    if let Some(split) = interior.iter().position(|&c| is_sentence_punctuation(c)) {
        let key: String = interior.iter().flat_map(|c| c.to_lowercase()).collect();
        if let Some(display) = tables.honorific(&key) {
            tokens.push(honorific_token(key, display, leading, trailing, separator));
            return;
        }

        // The left half keeps the leading punctuation, the right half the
        // trailing punctuation and the original separator.
        let left: Vec<char> = leading.iter().chain(&interior[..=split]).copied().collect();
        let right: Vec<char> = interior[split + 1..].iter().chain(trailing).copied().collect();
        add_word(&left, Separator::Space, tables, tokens);
        add_word(&right, separator, tables, tokens);
        return;
    }

    let content: Vec<char> = interior.iter().flat_map(|c| c.to_lowercase()).collect();
    let contraction = content
        .iter()
        .position(|&c| is_apostrophe(c))
        .filter(|&i| i > 0 && i + 2 < content.len());

    // The period that title abbreviations carry does not end a sentence.
    let is_end = ends_sentence(trailing)
        && !(trailing == ['.'] && tables.is_title_abbreviation(&String::from_iter(&content)));

    tokens.push(Token {
        content,
        leading: leading.to_vec(),
        trailing: trailing.to_vec(),
        separator,
        is_end,
        contraction,
        ..Token::default()
    });
}

fn honorific_token(
    key: String,
    display: &str,
    leading: &[char],
    trailing: &[char],
    separator: Separator,
) -> Token {
    // The display form carries its own dots.
    let trailing = trailing.strip_prefix(&['.']).unwrap_or(trailing);
    Token {
        content: key.chars().collect(),
        leading: leading.to_vec(),
        trailing: trailing.to_vec(),
        separator,
        is_end: ends_sentence(trailing),
        is_honorific: true,
        display: Some(display.to_string()),
        ..Token::default()
    }
}

/// Any trailing punctuation ends a sentence, except a lone closing quote
/// or apostrophe.
fn ends_sentence(trailing: &[char]) -> bool {
    match trailing {
        [] => false,
        [only] => !is_apostrophe(*only),
        _ => true,
    }
}

/// The first word starts a sentence, as does any word after an ending
/// one. The last word always ends. Tokens without letters, such as a
/// spaced em-dash, pass the boundary on to the next word.
fn mark_boundaries(tokens: &mut [Token]) {
    let mut starts = true;
    for token in tokens.iter_mut() {
        token.is_start = starts;
        if token.is_empty() {
            starts |= token.is_end;
        } else {
            starts = token.is_end;
        }
    }
    if let Some(last) = tokens.last_mut() {
        last.is_end = true;
    }
    if let Some(last_word) = tokens.iter_mut().rev().find(|t| !t.is_empty()) {
        last_word.is_end = true;
    }
}
