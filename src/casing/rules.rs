//! Per-word capitalization rules.
//!
//! Tokens are visited left to right.  For each token the rules below are
//! tried in order and the first one that matches decides its casing:
//!
//! 1. empty words are skipped;
//! 2. honorifics keep their canonical spelling;
//! 3. Roman numerals are written in capitals;
//! 4. title abbreviations are capitalized and get a period;
//! 5. `Mc` names get their third letter capitalized;
//! 6. abbreviations from the forced-caps table are written in capitals;
//! 7. words that start or end a sentence are capitalized;
//! 8. small words stay lowercase, unless they are a stray single letter;
//! 9. everything else is capitalized.
//!
//! Between rules 5 and 6 a token may be repaired first: English fixes
//! `a` before a vowel to `an`, and the Romance locales strip an elided
//! prefix such as `l'` so the rest of the word is judged on its own.

use super::punctuation::{is_apostrophe, is_roman_letter, is_vowel};
use super::token::{Separator, Token};
use crate::{Locale, RuleTables};

/// The rule that decided how a token is cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Empty,
    Honorific,
    RomanNumeral,
    TitleAbbreviation,
    Mc,
    ForcedCaps,
    Boundary,
    SmallWord,
    /// A one-letter small word next to another short fragment.
    Fragment,
    Default,
}

/// A change made to a token before its casing rule ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repair {
    /// `a` rewritten to `an`.
    Article,
    /// An elided prefix was set aside; the casing rule saw only the rest.
    Contraction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub rule: Rule,
    pub repair: Option<Repair>,
}

impl From<Rule> for Classification {
    fn from(rule: Rule) -> Self {
        Self { rule, repair: None }
    }
}

/// Capitalize every token in place and report the rule applied to each.
pub fn apply(tokens: &mut [Token], locale: Locale, tables: &RuleTables) -> Vec<Classification> {
    (0..tokens.len())
        .map(|i| {
            let classification = classify(tokens, i, locale, tables);
            log::trace!("{:?} -> {:?}", tokens[i].text(), classification);
            classification
        })
        .collect()
}

fn classify(tokens: &mut [Token], i: usize, locale: Locale, tables: &RuleTables) -> Classification {
    if tokens[i].is_empty() {
        return Rule::Empty.into();
    }
    if tokens[i].is_honorific {
        return Rule::Honorific.into();
    }

    if let Some(stem) = roman_stem(&tokens[i], tables) {
        let token = &mut tokens[i];
        for ch in &mut token.content[..stem] {
            ch.make_ascii_uppercase();
        }
        token.is_roman_numeral = true;
        return Rule::RomanNumeral.into();
    }

    let key = tokens[i].key();
    if tables.is_title_abbreviation(&key) {
        let token = &mut tokens[i];
        uppercase_at(&mut token.content, 0);
        token.force_trailing_period();
        token.is_title_abbreviation = true;
        return Rule::TitleAbbreviation.into();
    }

    if tokens[i].len() > 3 && tokens[i].content.starts_with(&['m', 'c']) {
        let token = &mut tokens[i];
        uppercase_at(&mut token.content, 2);
        uppercase_at(&mut token.content, 0);
        token.neutralize_trailing_period();
        return Rule::Mc.into();
    }

    let mut repair = None;
    let mut offset = 0;
    if locale.is_english() {
        if needs_article_repair(tokens, i) {
            tokens[i].content = vec!['a', 'n'];
            repair = Some(Repair::Article);
        }
    } else if locale.handles_contractions()
        && let Some(boundary) = tokens[i].contraction
    {
        let prefix: String = tokens[i].content[..boundary].iter().collect();
        if is_contraction_prefix(&prefix, tables) {
            if tokens[i].is_start {
                uppercase_at(&mut tokens[i].content, 0);
            }
            offset = boundary + 1;
            repair = Some(Repair::Contraction);
        }
    }

    let rule = case_word(tokens, i, offset, locale, tables);
    Classification { rule, repair }
}

/// Rules 6 to 9, applied to the part of the token from `offset` on.
fn case_word(
    tokens: &mut [Token],
    i: usize,
    offset: usize,
    locale: Locale,
    tables: &RuleTables,
) -> Rule {
    let word: String = tokens[i].content[offset..].iter().collect();
    let fragment = is_fragment(tokens, i);
    let token = &mut tokens[i];

    if tables.is_forced_caps(&word) {
        let upper: Vec<char> = word.chars().flat_map(char::to_uppercase).collect();
        token.content.splice(offset.., upper);
        token.neutralize_trailing_period();
        return Rule::ForcedCaps;
    }

    if token.is_start || token.is_end {
        uppercase_at(&mut token.content, offset);
        if token.len() > 1 {
            token.neutralize_trailing_period();
        }
        return Rule::Boundary;
    }

    if tables.is_small_word(locale, &word) {
        if word.chars().count() == 1 && fragment {
            uppercase_at(&mut token.content, offset);
            return Rule::Fragment;
        }
        return Rule::SmallWord;
    }

    uppercase_at(&mut token.content, offset);
    token.neutralize_trailing_period();
    Rule::Default
}

/// Length of the part of the word that spells a Roman numeral, if it does.
///
/// Only the letters before an apostrophe count (`viii's`).  Words with an
/// elided prefix are never numerals.
fn roman_stem(token: &Token, tables: &RuleTables) -> Option<usize> {
    if token.contraction.is_some() {
        return None;
    }
    let stem = token
        .content
        .iter()
        .position(|&c| is_apostrophe(c))
        .unwrap_or(token.len());
    let letters = &token.content[..stem];
    if letters.is_empty() || !letters.iter().all(|&c| is_roman_letter(c)) {
        return None;
    }
    let word: String = letters.iter().collect();
    (!tables.is_roman_exception(&word)).then_some(stem)
}

/// `a` followed by a word of two or more letters starting with a vowel.
fn needs_article_repair(tokens: &[Token], i: usize) -> bool {
    let token = &tokens[i];
    token.content == ['a']
        && token.trailing.is_empty()
        && token.separator == Separator::Space
        && tokens
            .get(i + 1)
            .is_some_and(|next| next.len() > 1 && is_vowel(next.content[0]))
}

/// Whether a neighbouring token is itself a one-letter (or empty) word,
/// which marks a one-letter small word as part of a run of initials.
fn is_fragment(tokens: &[Token], i: usize) -> bool {
    let short = |token: &Token| token.len() <= 1;
    (i > 0 && short(&tokens[i - 1])) || tokens.get(i + 1).is_some_and(short)
}

/// Elided prefixes: the table entries, plus four-letter forms of a
/// consonant, a vowel and a double `l` (`dell`, `nell`, `sull`).
fn is_contraction_prefix(prefix: &str, tables: &RuleTables) -> bool {
    if tables.is_contraction_prefix(prefix) {
        return true;
    }
    let chars: Vec<char> = prefix.chars().collect();
    matches!(chars.as_slice(), [first, vowel, 'l', 'l'] if !is_vowel(*first) && is_vowel(*vowel))
}

/// Capitalize the code point at `index`.
///
/// When the uppercase form expands (`ﬁ`, `ß`), only its first code point
/// stays a capital, so `ﬁrst` becomes `First` rather than `FIrst`.
fn uppercase_at(content: &mut Vec<char>, index: usize) {
    if let Some(&ch) = content.get(index) {
        let mut upper = ch.to_uppercase();
        let first = upper.next().unwrap_or(ch);
        let rest: Vec<char> = upper.flat_map(char::to_lowercase).collect();
        content.splice(index..=index, std::iter::once(first).chain(rest));
    }
}
