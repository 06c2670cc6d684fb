//! Building normalized questions from raw JSON entries.

use quizbook_types::{Letter, QuestionRecord};
use serde_json::Value;

/// How the correct letter is pulled out of an `answer` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LetterMatching {
    /// First A-D character anywhere in the field. See [`Letter::extract`].
    #[default]
    FirstOccurrence,

    /// Only a leading letter token. See [`Letter::extract_leading`].
    Leading,
}

impl LetterMatching {
    /// Extract the letter from a raw answer value. Non-text values yield `None`.
    pub fn extract(self, answer: &Value) -> Option<Letter> {
        let text = answer.as_str()?;
        match self {
            Self::FirstOccurrence => Letter::extract(text),
            Self::Leading => Letter::extract_leading(text),
        }
    }
}

/// Why a raw entry did not become a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Skip {
    #[error("entry is not an object")]
    NotAnObject,

    #[error("missing 'question'")]
    MissingQuestion,

    #[error("missing 'answer'")]
    MissingAnswer,
}

/// Normalize one raw question entry.
///
/// Requires `question` and `answer` keys. Options are kept only when at
/// least four are given; `explanation` defaults to empty.
pub fn build_question(entry: &Value, letters: LetterMatching) -> Result<QuestionRecord, Skip> {
    let entry = entry.as_object().ok_or(Skip::NotAnObject)?;
    let question = entry.get("question").ok_or(Skip::MissingQuestion)?;
    let answer = entry.get("answer").ok_or(Skip::MissingAnswer)?;

    let mut record = QuestionRecord::new(text_of(question), letters.extract(answer));

    if let Some(Value::Array(options)) = entry.get("options") {
        record = record.with_options(options.iter().map(text_of));
    }

    match entry.get("explanation") {
        None | Some(Value::Null) => {}
        Some(explanation) => record = record.with_explanation(text_of(explanation)),
    }

    Ok(record)
}

/// Display text of a raw value: strings as-is, anything else as JSON.
pub(crate) fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
