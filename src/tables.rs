//! Exception word lists that drive the capitalization rules.
//!
//! Every table is an exact-match lookup on lowercase keys.  The built-in
//! tables are assembled once on first use and shared read-only; callers
//! with their own vocabulary get an owned copy through
//! [`RuleTables::extend`].

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::Locale;

static BUILTIN: OnceLock<RuleTables> = OnceLock::new();

/// English words spelled only with the letters `i v x l c d m`.
const ROMAN_EXCEPTIONS: &[&str] = &[
    "ci", "cid", "cill", "civic", "civil", "clim", "cm", "di", "did", "didi", "dil", "dill",
    "dilli", "dim", "divi", "dividivi", "dix", "dixi", "dixil", "dm", "id", "il", "ill", "im",
    "imid", "imidic", "immix", "ld", "li", "lid", "lil", "lili", "lill", "lilli", "lim", "liv",
    "livi", "livid", "livvi", "lm", "lviv", "md", "mi", "mic", "mid", "midi", "mil", "mild",
    "mill", "milli", "mim", "mimi", "mimic", "mix", "mv", "vi", "vic", "vici", "vid", "vild",
    "vill", "villi", "vim", "viv", "vivi", "vivid", "vivl",
];

const ENGLISH_SMALL: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "if", "in", "nor", "of", "on", "or", "the",
    "to", "vs",
];

const FRENCH_SMALL: &[&str] = &[
    "à", "au", "aux", "avec", "d", "dans", "de", "des", "du", "en", "et", "l", "la", "le", "les",
    "ou", "par", "pour", "sans", "sous", "sur", "un", "une",
];

const GERMAN_SMALL: &[&str] = &[
    "am", "an", "auf", "aus", "bei", "das", "dem", "den", "der", "des", "die", "ein", "eine",
    "einem", "einen", "einer", "eines", "für", "im", "in", "mit", "nach", "oder", "über", "und",
    "unter", "vom", "von", "zu", "zum", "zur",
];

const ITALIAN_SMALL: &[&str] = &[
    "a", "agli", "ai", "al", "alla", "alle", "allo", "coi", "col", "con", "da", "dal", "dei",
    "degli", "del", "della", "delle", "dello", "di", "e", "fra", "gli", "i", "il", "in", "la",
    "le", "lo", "nel", "o", "per", "su", "sul", "tra", "un", "una", "uno",
];

const SPANISH_SMALL: &[&str] = &[
    "a", "al", "con", "de", "del", "e", "el", "en", "la", "las", "lo", "los", "o", "para", "por",
    "sin", "sobre", "u", "un", "una", "unas", "unos", "y",
];

const PORTUGUESE_SMALL: &[&str] = &[
    "a", "à", "ao", "as", "com", "da", "das", "de", "do", "dos", "e", "em", "na", "nas", "no",
    "nos", "o", "os", "ou", "para", "por", "um", "uma",
];

const DUTCH_SMALL: &[&str] = &[
    "aan", "de", "een", "en", "het", "in", "met", "of", "op", "te", "van", "voor",
];

const LATIN_SMALL: &[&str] = &[
    "a", "ab", "ad", "cum", "de", "e", "et", "ex", "in", "per", "pro", "sub",
];

/// Courtesy and professional titles written before a name.
const TITLE_ABBREVIATIONS: &[&str] = &[
    "adm", "capt", "cmdr", "dott", "dr", "dra", "fr", "gen", "gov", "hon", "lt", "maj",
    "messrs", "mlle", "mme", "mr", "mrs", "ms", "pres", "prof", "rev", "revd", "sgt", "sig", "sr",
    "sra", "srta",
];

/// Abbreviations that are always written in capitals.
const FORCED_CAPS: &[&str] = &[
    "bbc", "cia", "dna", "fbi", "gb", "kgb", "nasa", "nato", "nhs", "raf", "rspb", "rspca", "sas",
    "tv", "uk", "unesco", "unicef", "usa", "ussr", "ymca", "ywca",
];

/// Academic and professional post-nominals, keyed without their final dot.
const HONORIFICS: &[(&str, &str)] = &[
    ("b.a", "B.A"),
    ("b.d", "B.D"),
    ("b.sc", "B.Sc"),
    ("d.c.l", "D.C.L"),
    ("d.d", "D.D"),
    ("d.litt", "D.Litt"),
    ("d.phil", "D.Phil"),
    ("d.sc", "D.Sc"),
    ("f.g.s", "F.G.S"),
    ("f.l.s", "F.L.S"),
    ("f.r.c.p", "F.R.C.P"),
    ("f.r.c.s", "F.R.C.S"),
    ("f.r.g.s", "F.R.G.S"),
    ("f.r.s", "F.R.S"),
    ("f.r.s.e", "F.R.S.E"),
    ("f.s.a", "F.S.A"),
    ("k.c", "K.C"),
    ("k.c.b", "K.C.B"),
    ("l.r.c.p", "L.R.C.P"),
    ("litt.d", "Litt.D"),
    ("ll.b", "LL.B"),
    ("ll.d", "LL.D"),
    ("ll.m", "LL.M"),
    ("m.a", "M.A"),
    ("m.d", "M.D"),
    ("m.p", "M.P"),
    ("m.r.c.s", "M.R.C.S"),
    ("m.sc", "M.Sc"),
    ("mus.b", "Mus.B"),
    ("mus.d", "Mus.D"),
    ("o.b.e", "O.B.E"),
    ("ph.d", "Ph.D"),
    ("q.c", "Q.C"),
    ("s.j", "S.J"),
    ("s.t.d", "S.T.D"),
];

const NOBILITY: &[&str] = &[
    "archduke", "baron", "baroness", "baronet", "comte", "comtesse", "conde", "condesa", "conte",
    "contessa", "count", "countess", "dame", "don", "doña", "duc", "duca", "duchess", "duchesse",
    "duke", "duque", "duquesa", "earl", "emperor", "empress", "freiherr", "fürst", "graf",
    "gräfin", "herzog", "king", "lady", "lord", "marchioness", "marquess", "marquis", "marquise",
    "prince", "princess", "principe", "queen", "sir", "vicomte", "viscount", "viscountess",
];

/// Connectors that belong to the surname that follows them.
const PARTICLES: &[&str] = &[
    "al", "bin", "da", "das", "de", "degli", "dei", "del", "della", "delle", "dello", "den", "der",
    "des", "di", "do", "dos", "du", "e", "el", "ibn", "la", "le", "lo", "saint", "st", "ten",
    "ter", "van", "vander", "vom", "von", "y", "zu", "zum", "zur",
];

/// Elided forms split off before an apostrophe (`l'`, `qu'`, `all'`).
const CONTRACTION_PREFIXES: &[&str] = &[
    "all", "c", "d", "j", "jusqu", "l", "lorsqu", "m", "n", "nessun", "puisqu", "qu", "quell",
    "quoiqu", "s", "sant", "t", "un",
];

/// Generational suffixes that may trail an author's name.
const GENERATIONAL: &[&str] = &["esq", "jnr", "jr", "snr", "sr"];

/// Extra entries layered over the built-in tables.
///
/// This is the shape of the `[words]` section of a configuration file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct WordLists {
    /// Words kept lowercase mid-title, for every locale.
    pub small: Vec<String>,
    /// Words that look like Roman numerals but are not.
    pub roman_exceptions: Vec<String>,
    /// Titles written before a name, such as `dr`.
    pub title_abbreviations: Vec<String>,
    /// Abbreviations always written in capitals.
    pub abbreviations: Vec<String>,
    /// Titles of nobility, such as `sir`.
    pub nobility: Vec<String>,
    /// Surname particles, such as `van`.
    pub particles: Vec<String>,
    /// Elided prefixes, such as `l`.
    pub contraction_prefixes: Vec<String>,
    /// Post-nominals keyed by their lowercase dotted spelling without the
    /// final dot, mapped to how they should be displayed.
    pub honorifics: HashMap<String, String>,
}

/// The immutable lookup tables consulted by the formatter.
#[derive(Debug, Clone, Default)]
pub struct RuleTables {
    roman_exceptions: HashSet<String>,
    small_words: HashMap<Locale, HashSet<String>>,
    extra_small_words: HashSet<String>,
    title_abbreviations: HashSet<String>,
    forced_caps: HashSet<String>,
    honorifics: HashMap<String, String>,
    nobility: HashSet<String>,
    particles: HashSet<String>,
    contraction_prefixes: HashSet<String>,
    generational: HashSet<String>,
}

fn word_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn extend_set(set: &mut HashSet<String>, words: &[String]) {
    set.extend(words.iter().map(|w| w.trim().to_lowercase()));
}

impl RuleTables {
    /// The built-in tables, built on first use.
    pub fn builtin() -> &'static RuleTables {
        BUILTIN.get_or_init(|| {
            log::debug!("building built-in rule tables");
            RuleTables::new()
        })
    }

    fn new() -> Self {
        let small_words = [
            (Locale::Generic, &[][..]),
            (Locale::English, ENGLISH_SMALL),
            (Locale::French, FRENCH_SMALL),
            (Locale::German, GERMAN_SMALL),
            (Locale::Italian, ITALIAN_SMALL),
            (Locale::Spanish, SPANISH_SMALL),
            (Locale::Portuguese, PORTUGUESE_SMALL),
            (Locale::Dutch, DUTCH_SMALL),
            (Locale::Latin, LATIN_SMALL),
        ]
        .into_iter()
        .map(|(locale, words)| (locale, word_set(words)))
        .collect();

        Self {
            roman_exceptions: word_set(ROMAN_EXCEPTIONS),
            small_words,
            extra_small_words: HashSet::new(),
            title_abbreviations: word_set(TITLE_ABBREVIATIONS),
            forced_caps: word_set(FORCED_CAPS),
            honorifics: HONORIFICS
                .iter()
                .map(|(key, display)| (key.to_string(), display.to_string()))
                .collect(),
            nobility: word_set(NOBILITY),
            particles: word_set(PARTICLES),
            contraction_prefixes: word_set(CONTRACTION_PREFIXES),
            generational: word_set(GENERATIONAL),
        }
    }

    /// Return a copy of these tables with `extra` merged in.
    pub fn extend(&self, extra: &WordLists) -> RuleTables {
        let mut tables = self.clone();
        extend_set(&mut tables.extra_small_words, &extra.small);
        extend_set(&mut tables.roman_exceptions, &extra.roman_exceptions);
        extend_set(&mut tables.title_abbreviations, &extra.title_abbreviations);
        extend_set(&mut tables.forced_caps, &extra.abbreviations);
        extend_set(&mut tables.nobility, &extra.nobility);
        extend_set(&mut tables.particles, &extra.particles);
        extend_set(&mut tables.contraction_prefixes, &extra.contraction_prefixes);
        for (key, display) in &extra.honorifics {
            let key = key.trim().trim_end_matches('.').to_lowercase();
            tables.honorifics.insert(key, display.clone());
        }
        tables
    }

    pub fn is_roman_exception(&self, word: &str) -> bool {
        self.roman_exceptions.contains(word)
    }

    pub fn is_small_word(&self, locale: Locale, word: &str) -> bool {
        self.extra_small_words.contains(word)
            || self
                .small_words
                .get(&locale)
                .is_some_and(|words| words.contains(word))
    }

    pub fn is_title_abbreviation(&self, word: &str) -> bool {
        self.title_abbreviations.contains(word)
    }

    pub fn is_forced_caps(&self, word: &str) -> bool {
        self.forced_caps.contains(word)
    }

    /// The display form of an honorific, if `word` is one.
    pub fn honorific(&self, word: &str) -> Option<&str> {
        self.honorifics.get(word).map(String::as_str)
    }

    pub fn is_nobility(&self, word: &str) -> bool {
        self.nobility.contains(word)
    }

    pub fn is_particle(&self, word: &str) -> bool {
        self.particles.contains(word)
    }

    pub fn is_contraction_prefix(&self, word: &str) -> bool {
        self.contraction_prefixes.contains(word)
    }

    pub fn is_generational(&self, word: &str) -> bool {
        self.generational.contains(word)
    }
}
