//! Character classes used while splitting and classifying words.

// Unicode constants for punctuation characters

/// Straight single quote / apostrophe (U+0027)
pub const STRAIGHT_SINGLE_QUOTE: char = '\u{0027}';
/// Left single quotation mark (U+2018)
pub const LEFT_SINGLE_QUOTE: char = '\u{2018}';
/// Right single quotation mark (U+2019) - also used as curly apostrophe
pub const RIGHT_SINGLE_QUOTE: char = '\u{2019}';
/// Grave accent (U+0060), typed as an apostrophe in old catalogue data
pub const GRAVE_ACCENT: char = '\u{0060}';
/// Em dash (U+2014)
pub const EM_DASH: char = '\u{2014}';

/// Whether `ch` belongs to a Unicode punctuation category (`P*`).
///
/// Symbols such as `$`, `+`, `<` or `|` are not punctuation.
pub fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '!' | '"'
            | '#'
            | '%'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | ','
            | '-'
            | '.'
            | '/'
            | ':'
            | ';'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '_'
            | '{'
            | '}'
            | '\u{00A1}' // INVERTED EXCLAMATION MARK
            | '\u{00A7}' // SECTION SIGN
            | '\u{00AB}' // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00B6}' // PILCROW SIGN
            | '\u{00B7}' // MIDDLE DOT
            | '\u{00BB}' // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00BF}' // INVERTED QUESTION MARK
            | '\u{2010}'..='\u{2027}' // hyphens, dashes, quotes, bullets, ellipsis
            | '\u{2030}'..='\u{2043}'
            | '\u{2045}'..='\u{2051}'
            | '\u{2053}'..='\u{205E}'
            | '\u{3001}'..='\u{3003}' // ideographic comma and full stop
            | '\u{3008}'..='\u{3011}' // CJK brackets
            | '\u{3014}'..='\u{301F}'
            | '\u{FF01}'..='\u{FF03}' // fullwidth forms
            | '\u{FF05}'..='\u{FF0A}'
            | '\u{FF0C}'..='\u{FF0F}'
            | '\u{FF1A}'
            | '\u{FF1B}'
            | '\u{FF1F}'
            | '\u{FF20}'
            | '\u{FF3B}'..='\u{FF3D}'
            | '\u{FF3F}'
            | '\u{FF5B}'
            | '\u{FF5D}'
            | '\u{FF5F}'..='\u{FF65}'
    )
}

/// Punctuation that splits a word in two when it appears between letters.
pub fn is_sentence_punctuation(ch: char) -> bool {
    matches!(ch, '.' | ',' | ';' | ':' | '!' | '?' | '&')
}

/// Characters used as an apostrophe.
pub fn is_apostrophe(ch: char) -> bool {
    matches!(
        ch,
        STRAIGHT_SINGLE_QUOTE | LEFT_SINGLE_QUOTE | RIGHT_SINGLE_QUOTE | GRAVE_ACCENT
    )
}

pub fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Letters that can spell a Roman numeral.
pub fn is_roman_letter(ch: char) -> bool {
    matches!(ch, 'i' | 'v' | 'x' | 'l' | 'c' | 'd' | 'm')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_punctuation() {
        for ch in ['.', ',', '(', ')', '"', '\'', '-', '?', '!', '&', '*'] {
            assert!(is_punctuation(ch), "{ch:?} should be punctuation");
        }
    }

    #[test]
    fn test_symbols_are_not_punctuation() {
        for ch in ['$', '+', '<', '=', '>', '^', '|', '~', GRAVE_ACCENT] {
            assert!(!is_punctuation(ch), "{ch:?} should not be punctuation");
        }
    }

    #[test]
    fn test_unicode_punctuation() {
        for ch in [EM_DASH, RIGHT_SINGLE_QUOTE, '\u{201C}', '\u{2026}', '«', '¿', '。'] {
            assert!(is_punctuation(ch), "{ch:?} should be punctuation");
        }
    }

    #[test]
    fn test_letters_and_digits_are_not_punctuation() {
        for ch in ['a', 'Z', 'é', 'ß', '7', 'ж'] {
            assert!(!is_punctuation(ch));
        }
    }

    #[test]
    fn test_apostrophes() {
        assert!(is_apostrophe('\''));
        assert!(is_apostrophe(RIGHT_SINGLE_QUOTE));
        assert!(is_apostrophe(GRAVE_ACCENT));
        assert!(!is_apostrophe('"'));
    }
}
