//! Input clean-up performed before tokenizing.

use super::punctuation::EM_DASH;

/// Catalogue annotation that is dropped from titles.
const MICROFORM_MARKER: &str = "[microform]";

/// Normalize raw catalogue text.
///
/// Decodes HTML entities, turns `--` and spaced hyphens into a spaced
/// em-dash, drops the microform marker, trims spaces and `;:.,` from both
/// ends, and removes enclosing parentheses or brackets.  May return an
/// empty string.
pub fn preprocess(text: &str) -> String {
    let decoded = html_escape::decode_html_entities(text);

    let spaced_dash = format!(" {EM_DASH} ");
    let normalized = decoded
        .replace("--", &EM_DASH.to_string())
        .replace(EM_DASH, &spaced_dash)
        .replace(" - ", &spaced_dash)
        .replace(MICROFORM_MARKER, "");

    let mut result = normalized
        .trim_matches(|c| matches!(c, ' ' | ';' | ':' | '.' | ','))
        .to_string();

    // A title wrapped in parentheses or brackets loses all of them.
    if result.starts_with('(') {
        result.retain(|c| c != '(' && c != ')');
    }
    if result.starts_with('[') {
        result.retain(|c| c != '[' && c != ']');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_entities() {
        assert_eq!(preprocess("war &amp; peace"), "war & peace");
        assert_eq!(preprocess("caf&eacute;"), "café");
    }

    #[test]
    fn test_double_hyphen_becomes_spaced_em_dash() {
        assert_eq!(preprocess("london--a history"), "london — a history");
    }

    #[test]
    fn test_em_dash_is_spaced() {
        assert_eq!(preprocess("london\u{2014}a history"), "london — a history");
    }

    #[test]
    fn test_spaced_hyphen_becomes_em_dash() {
        assert_eq!(preprocess("london - a history"), "london — a history");
        // Unspaced hyphens are compound words and stay.
        assert_eq!(preprocess("well-known facts"), "well-known facts");
    }

    #[test]
    fn test_drops_microform_marker() {
        assert_eq!(preprocess("the prince [microform]"), "the prince");
    }

    #[test]
    fn test_trims_stray_punctuation() {
        assert_eq!(preprocess(" ;the prince., "), "the prince");
        assert_eq!(preprocess("...:"), "");
    }

    #[test]
    fn test_strips_enclosing_parentheses() {
        assert_eq!(preprocess("(the prince) and (the pauper)"), "the prince and the pauper");
        assert_eq!(preprocess("[poems]"), "poems");
        // Parentheses that do not open the title are kept.
        assert_eq!(preprocess("poems (selected)"), "poems (selected)");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(preprocess(""), "");
        assert_eq!(preprocess("   "), "");
    }
}
