//! Languages the formatter knows rules for.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// The language whose rule tables drive capitalization.
///
/// `Generic` applies every language-independent rule (Roman numerals,
/// honorifics, abbreviations, sentence boundaries) but keeps no word
/// lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Generic,
    #[default]
    English,
    French,
    German,
    Italian,
    Spanish,
    Portuguese,
    Dutch,
    Latin,
}

impl Locale {
    /// Every supported locale, in declaration order.
    pub const ALL: [Locale; 9] = [
        Locale::Generic,
        Locale::English,
        Locale::French,
        Locale::German,
        Locale::Italian,
        Locale::Spanish,
        Locale::Portuguese,
        Locale::Dutch,
        Locale::Latin,
    ];

    /// The lowercase English name, as accepted in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Locale::Generic => "generic",
            Locale::English => "english",
            Locale::French => "french",
            Locale::German => "german",
            Locale::Italian => "italian",
            Locale::Spanish => "spanish",
            Locale::Portuguese => "portuguese",
            Locale::Dutch => "dutch",
            Locale::Latin => "latin",
        }
    }

    /// The ISO 639-1 code, if the locale has one.
    pub fn code(self) -> Option<&'static str> {
        match self {
            Locale::Generic => None,
            Locale::English => Some("en"),
            Locale::French => Some("fr"),
            Locale::German => Some("de"),
            Locale::Italian => Some("it"),
            Locale::Spanish => Some("es"),
            Locale::Portuguese => Some("pt"),
            Locale::Dutch => Some("nl"),
            Locale::Latin => Some("la"),
        }
    }

    pub fn is_english(self) -> bool {
        self == Locale::English
    }

    /// Whether elided prefixes such as `l'` or `dell'` are split off before
    /// the rest of the word is capitalized.
    ///
    /// English keeps `o'brien`-style words whole, and German has no elision
    /// worth splitting.
    pub fn handles_contractions(self) -> bool {
        !matches!(self, Locale::English | Locale::German)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur when parsing a locale name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("unknown locale {0:?}")]
    UnknownLocale(String),
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Locale::ALL
            .into_iter()
            .find(|locale| locale.name() == wanted || locale.code() == Some(wanted.as_str()))
            .ok_or_else(|| LocaleError::UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_name() {
        assert_eq!("french".parse::<Locale>().unwrap(), Locale::French);
        assert_eq!("Portuguese".parse::<Locale>().unwrap(), Locale::Portuguese);
        assert_eq!("generic".parse::<Locale>().unwrap(), Locale::Generic);
    }

    #[test]
    fn test_parse_by_code() {
        assert_eq!("de".parse::<Locale>().unwrap(), Locale::German);
        assert_eq!("IT".parse::<Locale>().unwrap(), Locale::Italian);
        assert_eq!(" es ".parse::<Locale>().unwrap(), Locale::Spanish);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "klingon".parse::<Locale>(),
            Err(LocaleError::UnknownLocale("klingon".to_string()))
        );
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_contraction_handling() {
        assert!(!Locale::English.handles_contractions());
        assert!(!Locale::German.handles_contractions());
        assert!(Locale::French.handles_contractions());
        assert!(Locale::Italian.handles_contractions());
        assert!(Locale::Generic.handles_contractions());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::English);
    }
}
