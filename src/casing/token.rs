//! The word unit shared by every stage of the pipeline.

/// What joins a token to the one after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    None,
    Space,
    Hyphen,
    Slash,
    /// End of input.
    Terminal,
}

impl Separator {
    /// The character written between this token and the next.
    pub fn as_char(self) -> Option<char> {
        match self {
            Separator::Space => Some(' '),
            Separator::Hyphen => Some('-'),
            Separator::Slash => Some('/'),
            Separator::None | Separator::Terminal => None,
        }
    }

    /// Whether the next token is a separate word rather than part of a
    /// hyphenated or slashed compound.
    pub fn is_word_break(self) -> bool {
        matches!(self, Separator::Space | Separator::Terminal)
    }
}

/// A word with its surrounding punctuation.
///
/// `content` holds the letters in lowercase until the rules engine
/// capitalizes individual positions.  Leading and trailing punctuation
/// never enter `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub content: Vec<char>,
    pub leading: Vec<char>,
    pub trailing: Vec<char>,
    pub separator: Separator,
    pub is_start: bool,
    pub is_end: bool,
    pub is_honorific: bool,
    pub is_title_abbreviation: bool,
    pub is_roman_numeral: bool,
    /// Index of the apostrophe that ends an elided prefix (`l'`, `dell'`).
    pub contraction: Option<usize>,
    /// Canonical spelling that replaces `content` when rendered.
    pub display: Option<String>,
}

impl Token {
    /// Number of code points in the word itself.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The word folded to lowercase, for table lookups.
    pub fn key(&self) -> String {
        self.content.iter().flat_map(|c| c.to_lowercase()).collect()
    }

    /// The word as it will be rendered, without punctuation.
    pub fn text(&self) -> String {
        match &self.display {
            Some(display) => display.clone(),
            None => self.content.iter().collect(),
        }
    }

    /// Whether the token was removed by author segmentation and must not
    /// be rendered.
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
            && self.leading.is_empty()
            && self.trailing.is_empty()
            && self.display.is_none()
    }

    /// Remove the token from rendering, keeping its place and separator.
    pub fn blank(&mut self) {
        self.content.clear();
        self.leading.clear();
        self.trailing.clear();
        self.display = None;
    }

    /// Append punctuation, word and punctuation to `out`.
    pub fn write_to(&self, out: &mut String) {
        out.extend(self.leading.iter());
        match &self.display {
            Some(display) => out.push_str(display),
            None => out.extend(self.content.iter()),
        }
        out.extend(self.trailing.iter());
    }

    /// Turn a single trailing `.` into `;` so a capitalized word in the
    /// middle of a title does not read as the end of a sentence.
    ///
    /// Ellipses (`..`, `...`) are left alone.
    pub fn neutralize_trailing_period(&mut self) {
        if self.trailing.first() == Some(&'.') && self.trailing.get(1) != Some(&'.') {
            self.trailing[0] = ';';
        }
    }

    /// Make the trailing punctuation start with exactly one `.`.
    pub fn force_trailing_period(&mut self) {
        self.trailing.retain(|&c| c != '.');
        self.trailing.insert(0, '.');
    }
}
