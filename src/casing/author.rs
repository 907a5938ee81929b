//! Splitting an author string into name fields.
//!
//! Segmentation runs on tokens that have already been cased.  Tokens it
//! moves into the title or suffix fields, and a leading "by" or "the",
//! are blanked so they drop out of the rendered display string.

use super::render::{render, trim_dangling_commas};
use super::token::{Separator, Token};
use crate::RuleTables;

/// The parts of a personal name.  Any field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorName {
    /// Courtesy titles and titles of nobility before the name, such as
    /// `Dr.` or `Sir`.
    pub title: String,
    pub first: String,
    pub middle: String,
    pub last: String,
    /// Post-nominals and generational suffixes, such as `M.D` or `Jr`.
    pub suffix: String,
}

impl AuthorName {
    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.first.is_empty()
            && self.middle.is_empty()
            && self.last.is_empty()
            && self.suffix.is_empty()
    }
}

/// Text accumulated from individual tokens, each joined to the previous
/// one by the separator that followed it.
#[derive(Default)]
struct Field {
    text: String,
    joiner: Option<char>,
}

impl Field {
    fn push(&mut self, token: &Token, text: &str) {
        if !self.text.is_empty() {
            self.text.push(self.joiner.unwrap_or(' '));
        }
        self.text.push_str(text);
        self.joiner = token.separator.as_char();
    }
}

/// Split cased tokens into name fields, blanking the tokens consumed by
/// the title and suffix.
pub fn segment(tokens: &mut [Token], tables: &RuleTables) -> AuthorName {
    if let Some(first) = tokens.first_mut()
        && matches!(first.key().as_str(), "by" | "the")
    {
        first.blank();
    }

    let title = take_titles(tokens, tables);
    let suffix = take_suffixes(tokens, tables);
    let names = name_indices(tokens);

    let (first, middle, last) = match comma_pivot(tokens, &names) {
        Some(pivot) => split_at_comma(tokens, &names, pivot, tables),
        None => split_at_surname(tokens, &names, tables),
    };

    let name = AuthorName {
        title,
        first,
        middle,
        last,
        suffix,
    };
    log::debug!("author fields: {name:?}");
    name
}

/// Indices of the tokens still available as name parts.
fn name_indices(tokens: &[Token]) -> Vec<usize> {
    (0..tokens.len())
        .filter(|&i| !tokens[i].is_empty() && !tokens[i].is_honorific)
        .collect()
}

/// Consume the run of title abbreviations and nobility titles at the start
/// of the name.  The run never takes the last name token, nor a token
/// followed by a comma (`King, Stephen`).
fn take_titles(tokens: &mut [Token], tables: &RuleTables) -> String {
    let Some(&last_name) = name_indices(tokens).last() else {
        return String::new();
    };

    let mut title = Field::default();
    for token in &mut tokens[..last_name] {
        if token.is_blank() {
            continue;
        }
        let is_title = (token.is_title_abbreviation || tables.is_nobility(&token.key()))
            && !token.trailing.contains(&',');
        if !is_title {
            break;
        }
        let mut text = token.text();
        if token.is_title_abbreviation {
            text.push('.');
        }
        title.push(token, &text);
        token.blank();
    }
    title.text
}

/// Consume honorifics wherever they occur, plus generational suffixes and
/// Roman numerals at the end of the name, in reading order.
fn take_suffixes(tokens: &mut [Token], tables: &RuleTables) -> String {
    let mut taken: Vec<usize> = (0..tokens.len())
        .filter(|&i| tokens[i].is_honorific && !tokens[i].is_blank())
        .collect();

    let mut names = name_indices(tokens);
    while let &[_, .., last] = names.as_slice() {
        if !is_trailing_suffix(&tokens[last], tables) {
            break;
        }
        taken.push(last);
        names.pop();
    }
    taken.sort_unstable();

    let mut suffix = Field::default();
    for i in taken {
        suffix.push(&tokens[i], &tokens[i].text());
        tokens[i].blank();
    }
    suffix.text
}

/// `Jr`, `Esq` and multi-letter numerals such as `III`.  A lone `I` or
/// `V` is more likely an initial.
fn is_trailing_suffix(token: &Token, tables: &RuleTables) -> bool {
    tables.is_generational(&token.key()) || (token.is_roman_numeral && token.len() > 1)
}

/// Position in `names` of the first name followed by a comma and a space,
/// provided another name comes after it.
fn comma_pivot(tokens: &[Token], names: &[usize]) -> Option<usize> {
    let (_, candidates) = names.split_last()?;
    candidates.iter().position(|&i| {
        tokens[i].trailing.contains(&',') && tokens[i].separator == Separator::Space
    })
}

/// `Last, First Middle`.
fn split_at_comma(
    tokens: &mut [Token],
    names: &[usize],
    pivot: usize,
    tables: &RuleTables,
) -> (String, String, String) {
    lowercase_particles(tokens, &names[..=pivot], names[0], tables);

    let rest = &names[pivot + 1..];
    let first_end = rest[chunk_end(tokens, rest)];
    (
        field(&tokens[rest[0]..=first_end]),
        field(&tokens[first_end + 1..]),
        field(&tokens[..=names[pivot]]),
    )
}

/// `First Middle Last`, where the surname is the last word together with
/// anything hyphenated to it and any particles before it.
fn split_at_surname(
    tokens: &mut [Token],
    names: &[usize],
    tables: &RuleTables,
) -> (String, String, String) {
    let Some(mut start) = names.len().checked_sub(1) else {
        return Default::default();
    };
    while start > 0 && !tokens[names[start - 1]].separator.is_word_break() {
        start -= 1;
    }
    while start > 0 && tables.is_particle(&tokens[names[start - 1]].key()) {
        start -= 1;
    }
    lowercase_particles(tokens, &names[start..], names[0], tables);

    let last = field(&tokens[names[start]..]);
    if start == 0 {
        return (String::new(), String::new(), last);
    }

    let given = &names[..start];
    let first_end = given[chunk_end(tokens, given)];
    (
        field(&tokens[given[0]..=first_end]),
        field(&tokens[first_end + 1..names[start]]),
        last,
    )
}

/// Position in `run` of the last token of the first word, following
/// hyphen and slash joins (`Jean-Paul`).
fn chunk_end(tokens: &[Token], run: &[usize]) -> usize {
    let mut end = 0;
    while end + 1 < run.len() && !tokens[run[end]].separator.is_word_break() {
        end += 1;
    }
    end
}

/// Write particles inside a surname in lowercase (`van Beethoven`) unless
/// the particle opens the whole name.  The final word is never touched.
fn lowercase_particles(
    tokens: &mut [Token],
    surname: &[usize],
    opening: usize,
    tables: &RuleTables,
) {
    let Some((_, particles)) = surname.split_last() else {
        return;
    };
    for &i in particles {
        let key = tokens[i].key();
        if i != opening && tables.is_particle(&key) {
            tokens[i].content = key.chars().collect();
        }
    }
}

fn field(tokens: &[Token]) -> String {
    trim_dangling_commas(&render(tokens)).to_string()
}
