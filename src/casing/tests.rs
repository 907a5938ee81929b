use super::*;

fn english(text: &str) -> String {
    title(text, Locale::English, RuleTables::builtin())
}

fn in_locale(text: &str, locale: Locale) -> String {
    title(text, locale, RuleTables::builtin())
}

fn author_en(text: &str) -> (String, AuthorName) {
    author(text, Locale::English, RuleTables::builtin())
}

#[test]
fn test_roman_numerals() {
    assert_eq!(english("henry viii"), "Henry VIII");
    assert_eq!(english("the civil war"), "The Civil War");
}

#[test]
fn test_small_words() {
    assert_eq!(english("lord of the rings"), "Lord of the Rings");
    assert_eq!(english("THE OLD MAN AND THE SEA"), "The Old Man and the Sea");
}

#[test]
fn test_article_repair() {
    assert_eq!(english("a elephant's tale"), "An Elephant's Tale");
}

#[test]
fn test_honorific_is_not_split() {
    assert_eq!(english("john m.d. smith"), "John M.D Smith");
}

#[test]
fn test_mc_name_with_possessive() {
    assert_eq!(english("mcdonald's farm"), "McDonald's Farm");
}

#[test]
fn test_forced_caps_at_end() {
    assert_eq!(english("history of the usa"), "History of the USA");
}

#[test]
fn test_title_abbreviation() {
    assert_eq!(english("dr jekyll and mr hyde"), "Dr. Jekyll and Mr. Hyde");
}

#[test]
fn test_double_hyphen_becomes_em_dash() {
    assert_eq!(english("london -- a history"), "London \u{2014} A History");
    assert_eq!(english("war - peace"), "War \u{2014} Peace");
}

#[test]
fn test_compound_words() {
    assert_eq!(english("the well-known story"), "The Well-Known Story");
    assert_eq!(english("war and/or peace"), "War and/or Peace");
}

#[test]
fn test_entities_are_decoded() {
    assert_eq!(english("war &amp; peace"), "War & Peace");
}

#[test]
fn test_catalogue_noise_is_removed() {
    assert_eq!(english("the prince [microform]"), "The Prince");
    assert_eq!(english("(the prince)"), "The Prince");
    assert_eq!(english("  the prince. "), "The Prince");
}

#[test]
fn test_sentence_inside_title() {
    assert_eq!(english("england. a history"), "England; A History");
}

#[test]
fn test_possessive_plural() {
    assert_eq!(english("the boys' club"), "The Boys' Club");
}

#[test]
fn test_title_abbreviations_do_not_start_sentences() {
    let once = english("a tale of mr and mrs smith");
    assert_eq!(once, "A Tale of Mr. and Mrs. Smith");
    assert_eq!(english(&once), once);
}

#[test]
fn test_leading_and_trailing_dashes() {
    assert_eq!(english("\u{2014} the history of rome"), "\u{2014} The History of Rome");
    assert_eq!(english("a history of the \u{2014}"), "A History of The \u{2014}");
}

#[test]
fn test_ligature_at_word_start() {
    let once = english("the \u{FB01}rst book");
    assert_eq!(once, "The First Book");
    assert_eq!(english(&once), once);
}

#[test]
fn test_italian_col() {
    assert_eq!(in_locale("viaggio col padre", Locale::Italian), "Viaggio col Padre");
    assert_eq!(in_locale("col tempo", Locale::Italian), "Col Tempo");
}

#[test]
fn test_french() {
    assert_eq!(in_locale("l'homme et la mer", Locale::French), "L'Homme et la Mer");
}

#[test]
fn test_german() {
    assert_eq!(
        in_locale("die reise in den süden", Locale::German),
        "Die Reise in den Süden"
    );
}

#[test]
fn test_italian() {
    assert_eq!(
        in_locale("storia dell'arte moderna", Locale::Italian),
        "Storia dell'Arte Moderna"
    );
}

#[test]
fn test_generic_capitalizes_everything() {
    assert_eq!(in_locale("lord of the rings", Locale::Generic), "Lord Of The Rings");
}

#[test]
fn test_degenerate_input() {
    assert_eq!(english(""), "");
    assert_eq!(english("..."), "");
    assert_eq!(english("   "), "");
    let (output, name) = author_en(" ; ");
    assert_eq!(output, "");
    assert!(name.is_empty());
}

#[test]
fn test_formatting_is_idempotent() {
    for text in [
        "henry viii",
        "england. a history",
        "dr jekyll and mr hyde",
        "london -- a history",
        "mcdonald's farm",
    ] {
        let once = english(text);
        assert_eq!(english(&once), once, "{text:?}");
    }
}

#[test]
fn test_author_comma_pivot() {
    let (output, name) = author_en("Smith, John Henry");
    assert_eq!(output, "Smith, John Henry");
    assert_eq!(name.last, "Smith");
    assert_eq!(name.first, "John");
    assert_eq!(name.middle, "Henry");
}

#[test]
fn test_author_particle() {
    let (output, name) = author_en("John van Beethoven");
    assert_eq!(output, "John van Beethoven");
    assert_eq!(name.first, "John");
    assert_eq!(name.last, "van Beethoven");
}

#[test]
fn test_author_display_has_no_dangling_comma() {
    let (output, name) = author_en("dr. john smith, jr.");
    assert_eq!(output, "John Smith");
    assert_eq!(name.suffix, "Jr");

    let (output, name) = author_en("smith, john, m.d.");
    assert_eq!(output, "Smith, John");
    assert_eq!(name.suffix, "M.D");
}

#[test]
fn test_author_title_and_suffix_are_removed_from_display() {
    let (output, name) = author_en("by sir arthur conan doyle");
    assert_eq!(output, "Arthur Conan Doyle");
    assert_eq!(name.title, "Sir");
    assert_eq!(name.first, "Arthur");
    assert_eq!(name.middle, "Conan");
    assert_eq!(name.last, "Doyle");

    let (output, name) = author_en("john m.d. smith");
    assert_eq!(output, "John Smith");
    assert_eq!(name.suffix, "M.D");
}
