//! Reassembling tokens into text.

use super::token::Token;

/// Join tokens back into a string.
///
/// Blanked tokens are skipped together with their separator, so a removed
/// word never leaves a doubled or dangling space behind.
pub fn render(tokens: &[Token]) -> String {
    let mut output = String::new();
    let mut pending = None;

    for token in tokens.iter().filter(|t| !t.is_blank()) {
        if let Some(separator) = pending {
            output.push(separator);
        }
        token.write_to(&mut output);
        pending = token.separator.as_char();
    }

    output
}

/// Drop the commas left at the end once the tokens after them were
/// blanked (`Smith, John, M.D` without its suffix).
pub fn trim_dangling_commas(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == ',' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casing::token::Separator;

    fn token(text: &str, separator: Separator) -> Token {
        Token {
            content: text.chars().collect(),
            separator,
            ..Token::default()
        }
    }

    #[test]
    fn test_joins_with_separators() {
        let tokens = vec![
            token("Well", Separator::Hyphen),
            token("Known", Separator::Space),
            token("And", Separator::Slash),
            token("Or", Separator::Terminal),
        ];
        assert_eq!(render(&tokens), "Well-Known And/Or");
    }

    #[test]
    fn test_includes_punctuation() {
        let mut quoted = token("Hello", Separator::Terminal);
        quoted.leading = vec!['"'];
        quoted.trailing = vec!['!', '"'];
        assert_eq!(render(&[quoted]), "\"Hello!\"");
    }

    #[test]
    fn test_skips_blank_tokens_and_their_separators() {
        let mut tokens = vec![
            token("By", Separator::Space),
            token("John", Separator::Space),
            token("Smith", Separator::Space),
            token("M.D", Separator::Terminal),
        ];
        tokens[0].blank();
        tokens[3].blank();
        assert_eq!(render(&tokens), "John Smith");
    }

    #[test]
    fn test_punctuation_only_token_is_rendered() {
        let mut dash = token("", Separator::Space);
        dash.leading = vec!['\u{2014}'];
        let tokens = vec![token("War", Separator::Space), dash, token("Peace", Separator::Terminal)];
        assert_eq!(render(&tokens), "War \u{2014} Peace");
    }

    #[test]
    fn test_trim_dangling_commas() {
        assert_eq!(trim_dangling_commas("Smith, John,"), "Smith, John");
        assert_eq!(trim_dangling_commas("Smith, John"), "Smith, John");
        assert_eq!(trim_dangling_commas(""), "");
    }

    #[test]
    fn test_empty() {
        assert_eq!(render(&[]), "");
    }
}
