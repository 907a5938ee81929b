//! Titlecase is a locale-aware title case formatter for book titles and
//! author names, tuned for the noise found in library catalogue records.
//!
//! # Example
//!
//! ```
//! use titlecase::{format_author, format_title, Locale};
//!
//! assert_eq!(format_title("lord of the rings", Locale::English), "Lord of the Rings");
//!
//! let (display, name) = format_author("Smith, John Henry", Locale::English);
//! assert_eq!(display, "Smith, John Henry");
//! assert_eq!(name.last, "Smith");
//! assert_eq!(name.first, "John");
//! ```

mod casing;
pub mod config;
mod locale;
mod tables;

pub use casing::AuthorName;
pub use config::{Config, ConfigError};
pub use locale::{Locale, LocaleError};
pub use tables::{RuleTables, WordLists};

/// Formats titles and author names against a set of rule tables.
///
/// A `Formatter` only borrows its tables, so it is cheap to copy and can
/// be shared between threads.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    tables: &'a RuleTables,
}

impl Default for Formatter<'static> {
    fn default() -> Self {
        Self::new(RuleTables::builtin())
    }
}

impl<'a> Formatter<'a> {
    pub fn new(tables: &'a RuleTables) -> Self {
        Self { tables }
    }

    /// Title-case `text` for `locale`.
    ///
    /// Every input has a result: empty or punctuation-only text gives an
    /// empty string.
    pub fn title(&self, text: &str, locale: Locale) -> String {
        casing::title(text, locale, self.tables)
    }

    /// Case `text` as an author name and split it into its parts.
    ///
    /// The returned string is the cased name without the leading article,
    /// titles and suffixes that were moved into the [`AuthorName`].
    pub fn author(&self, text: &str, locale: Locale) -> (String, AuthorName) {
        casing::author(text, locale, self.tables)
    }
}

/// Title-case `text` with the built-in rule tables.
pub fn format_title(text: &str, locale: Locale) -> String {
    Formatter::default().title(text, locale)
}

/// Case and segment an author name with the built-in rule tables.
pub fn format_author(text: &str, locale: Locale) -> (String, AuthorName) {
    Formatter::default().author(text, locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_input() {
        assert_eq!(format_title("", Locale::English), "");
        let (display, name) = format_author("", Locale::English);
        assert_eq!(display, "");
        assert_eq!(name, AuthorName::default());
    }

    #[test]
    fn test_format_title() {
        assert_eq!(format_title("henry viii", Locale::English), "Henry VIII");
    }

    #[test]
    fn test_formatter_with_custom_tables() {
        let extra = WordLists {
            abbreviations: vec!["ibm".to_string()],
            ..WordLists::default()
        };
        let tables = RuleTables::builtin().extend(&extra);
        let formatter = Formatter::new(&tables);
        assert_eq!(formatter.title("the ibm story", Locale::English), "The IBM Story");
        assert_eq!(format_title("the ibm story", Locale::English), "The Ibm Story");
    }

    #[test]
    fn test_formatter_is_shareable() {
        let formatter = Formatter::default();
        let results: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = ["henry viii", "the civil war"]
                .into_iter()
                .map(|text| scope.spawn(move || formatter.title(text, Locale::English)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, vec!["Henry VIII", "The Civil War"]);
    }
}
