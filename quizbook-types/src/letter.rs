use std::fmt;

/// One of the four canonical option identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    /// All letters in display order.
    pub const ALL: [Letter; 4] = [Letter::A, Letter::B, Letter::C, Letter::D];

    /// Zero-based position of this letter among the options.
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    /// The letter at the given option position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Uppercase character for this letter.
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }

    /// Parse a single character, case-insensitively.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    /// Extract an answer letter from a free-form answer field.
    ///
    /// Returns the first character, scanning left to right, that is one of
    /// `A`-`D` in either case. This accepts `"B"`, `"B."`, `"B) Something"`
    /// and `"b - something"`, but it also fires on the first A-D character of
    /// any leading word: `"Dan said B"` yields `D`.
    /// [`Letter::extract_leading`] is the stricter alternative.
    ///
    /// ```
    /// use quizbook_types::Letter;
    ///
    /// assert_eq!(Letter::extract("B. The Logic Theorist"), Some(Letter::B));
    /// assert_eq!(Letter::extract("Dan said B"), Some(Letter::D));
    /// assert_eq!(Letter::extract("none here"), None);
    /// ```
    pub fn extract(field: &str) -> Option<Self> {
        field.chars().find_map(Self::from_char)
    }

    /// Extract an answer letter only when it is the leading token.
    ///
    /// The trimmed field must start with a letter `A`-`D` that is either the
    /// whole field or followed by `.`, `)`, `-`, `:` or whitespace.
    pub fn extract_leading(field: &str) -> Option<Self> {
        let mut chars = field.trim().chars();
        let letter = chars.next().and_then(Self::from_char)?;
        match chars.next() {
            None => Some(letter),
            Some('.' | ')' | '-' | ':') => Some(letter),
            Some(c) if c.is_whitespace() => Some(letter),
            Some(_) => None,
        }
    }

    /// The canonical option label, e.g. `"B)"`.
    pub fn label(self) -> String {
        format!("{})", self.as_char())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
