use crate::Letter;

/// A single normalized multiple-choice question.
///
/// Immutable after construction. When options are present there are
/// exactly four of them, each starting with its own letter label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    /// Trimmed question text.
    text: String,

    /// The correct answer, if it could be determined.
    correct: Option<Letter>,

    /// Labelled option texts (`"A) ..."` through `"D) ..."`).
    options: Option<[String; 4]>,

    /// Explanation shown when the answer is revealed. May be empty.
    explanation: String,
}

impl QuestionRecord {
    /// Create a question without options or explanation. The text is trimmed.
    pub fn new(text: impl AsRef<str>, correct: Option<Letter>) -> Self {
        Self {
            text: text.as_ref().trim().to_string(),
            correct,
            options: None,
            explanation: String::new(),
        }
    }

    /// Attach options from raw option texts.
    ///
    /// See [`label_options`] for the normalization applied. Fewer than four
    /// options leaves the question without options.
    pub fn with_options<I, S>(mut self, raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options = label_options(raw);
        self
    }

    /// Set the explanation text.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Get the question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the correct letter, if known.
    pub fn correct(&self) -> Option<Letter> {
        self.correct
    }

    /// Get the labelled options, if any were supplied.
    pub fn options(&self) -> Option<&[String; 4]> {
        self.options.as_ref()
    }

    /// Get the explanation (empty if none).
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Text to show for each of the four choices.
    ///
    /// Falls back to bare labels (`"A)"`) when the question has no options.
    pub fn display_options(&self) -> [String; 4] {
        match &self.options {
            Some(options) => options.clone(),
            None => Letter::ALL.map(Letter::label),
        }
    }

    /// Text to show for one choice.
    pub fn option_text(&self, letter: Letter) -> String {
        match &self.options {
            Some(options) => options[letter.index()].clone(),
            None => letter.label(),
        }
    }

    /// The answer line shown when the answer is revealed.
    ///
    /// `"Answer: B) text"` with options, `"Answer: B)"` without, and
    /// `"Answer: (unknown)"` when no correct letter could be determined.
    pub fn reveal(&self) -> String {
        match self.correct {
            Some(letter) => format!("Answer: {}", self.option_text(letter)),
            None => "Answer: (unknown)".to_string(),
        }
    }

    /// Check whether the given choice is correct.
    ///
    /// A question without a determinable correct letter is never correct.
    pub fn is_correct(&self, choice: Option<Letter>) -> bool {
        matches!((choice, self.correct), (Some(chosen), Some(correct)) if chosen == correct)
    }
}

/// Normalize raw option texts into four labelled options.
///
/// Takes the first four entries (requires at least four), trims each, and
/// prefixes `"{L}) "` unless the text already starts with `"{L})"` for its
/// own position, comparing the letter case-insensitively.
///
/// ```
/// use quizbook_types::label_options;
///
/// let options = label_options(["a", "B) b", " c ", "d", "ignored"]).unwrap();
/// assert_eq!(options, ["A) a", "B) b", "C) c", "D) d"]);
/// assert!(label_options(["a", "b", "c"]).is_none());
/// ```
pub fn label_options<I, S>(raw: I) -> Option<[String; 4]>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let first_four: Vec<String> = raw
        .into_iter()
        .take(4)
        .map(|s| s.as_ref().trim().to_string())
        .collect();
    let first_four: [String; 4] = first_four.try_into().ok()?;

    let mut position = 0;
    Some(first_four.map(|text| {
        let letter = Letter::ALL[position];
        position += 1;
        if has_label(&text, letter) {
            text
        } else {
            format!("{}) {}", letter, text)
        }
    }))
}

fn has_label(text: &str, letter: Letter) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some(')')) if first.to_ascii_uppercase() == letter.as_char()
    )
}
