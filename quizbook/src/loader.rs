//! Turning raw quiz documents into a canonical [`Quiz`].
//!
//! Two document shapes are accepted:
//!
//! - a bare list of question objects (the legacy shape), titled after the
//!   source file;
//! - an object with a `questions` list plus optional `metadata` and
//!   `config` objects.
//!
//! Both are resolved once into a [`Quiz`]; nothing downstream looks at the
//! source shape again.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use quizbook_types::{Metadata, Quiz, QuizConfig};
use serde_json::{Map, Value};

use crate::record::{self, LetterMatching, text_of};
use crate::tolerant;

/// Error type for loading a quiz document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported JSON structure. Expect a list or an object with a 'questions' array.")]
    UnsupportedRoot,

    #[error("JSON root is an object but no valid 'questions' array was found.")]
    MissingQuestions,

    #[error("No valid questions found. Each question needs 'question' and 'answer'.")]
    NoValidQuestions,
}

/// How document text is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Plain JSON.
    Strict,

    /// JSON with an optional BOM, comments and trailing commas.
    #[default]
    Tolerant,
}

/// Options controlling how documents become quizzes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub parse: ParseMode,
    pub letters: LetterMatching,
}

impl LoadOptions {
    /// Parse plain JSON only.
    pub fn strict(mut self) -> Self {
        self.parse = ParseMode::Strict;
        self
    }

    /// Only accept a leading letter token as the correct answer.
    pub fn leading_letters(mut self) -> Self {
        self.letters = LetterMatching::Leading;
        self
    }
}

/// A raw document classified by shape.
#[derive(Debug, Clone, Copy)]
pub enum RawDocument<'a> {
    /// Root is a list of question entries.
    Legacy(&'a [Value]),

    /// Root is an object with `questions` and optional extras.
    Wrapped {
        questions: &'a [Value],
        metadata: Option<&'a Map<String, Value>>,
        config: Option<&'a Map<String, Value>>,
    },
}

impl<'a> RawDocument<'a> {
    /// Detect the document shape.
    pub fn classify(root: &'a Value) -> Result<Self, LoadError> {
        match root {
            Value::Array(entries) => Ok(Self::Legacy(entries)),
            Value::Object(object) => {
                let questions = object
                    .get("questions")
                    .and_then(Value::as_array)
                    .ok_or(LoadError::MissingQuestions)?;
                Ok(Self::Wrapped {
                    questions,
                    metadata: object.get("metadata").and_then(Value::as_object),
                    config: object.get("config").and_then(Value::as_object),
                })
            }
            _ => Err(LoadError::UnsupportedRoot),
        }
    }

    /// The raw question entries.
    pub fn entries(&self) -> &'a [Value] {
        match *self {
            Self::Legacy(entries) => entries,
            Self::Wrapped { questions, .. } => questions,
        }
    }

    /// The `metadata.title` of a wrapped document, if it is non-empty text.
    pub fn title(&self) -> Option<String> {
        let Self::Wrapped {
            metadata: Some(metadata),
            ..
        } = self
        else {
            return None;
        };
        metadata
            .get("title")
            .filter(|title| !title.is_null())
            .map(text_of)
            .filter(|title| !title.is_empty())
    }
}

/// Parse document text according to the parse mode.
pub fn parse_document(text: &str, mode: ParseMode) -> Result<Value, LoadError> {
    let value = match mode {
        ParseMode::Strict => serde_json::from_str(text)?,
        ParseMode::Tolerant => serde_json::from_str(&tolerant::relax(text))?,
    };
    Ok(value)
}

/// Build a quiz from a parsed document.
///
/// `source_name` is typically a file name; without a metadata title its
/// stem becomes the quiz title. Entries that cannot be built are dropped.
pub fn load(document: &Value, source_name: &str, options: &LoadOptions) -> Result<Quiz, LoadError> {
    let raw = RawDocument::classify(document)?;

    let mut questions = Vec::with_capacity(raw.entries().len());
    for (position, entry) in raw.entries().iter().enumerate() {
        match record::build_question(entry, options.letters) {
            Ok(question) => questions.push(question),
            Err(skip) => debug!("{source_name}: dropping entry {}: {skip}", position + 1),
        }
    }

    let title = raw.title().unwrap_or_else(|| stem(source_name));
    let mut quiz = Quiz::new(title, questions).ok_or(LoadError::NoValidQuestions)?;

    if let RawDocument::Wrapped {
        metadata, config, ..
    } = raw
    {
        if let Some(metadata) = metadata {
            quiz = quiz.with_metadata(read_metadata(metadata));
        }
        if let Some(config) = config {
            quiz = quiz.with_config(read_config(config));
        }
    }

    info!("loaded '{}' with {} questions", quiz.title, quiz.len());
    Ok(quiz)
}

/// Parse and load document text.
pub fn load_str(text: &str, source_name: &str, options: &LoadOptions) -> Result<Quiz, LoadError> {
    let document = parse_document(text, options.parse)?;
    load(&document, source_name, options)
}

/// Read, parse and load a quiz file.
pub fn load_file(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Quiz, LoadError> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    load_str(&text, &source_name, options)
}

pub(crate) fn read_text(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// "chapter3.json" -> "chapter3"
fn stem(source_name: &str) -> String {
    Path::new(source_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| source_name.to_string())
}

fn read_metadata(metadata: &Map<String, Value>) -> Metadata {
    metadata
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), text_of(value)))
        .collect()
}

fn read_config(config: &Map<String, Value>) -> QuizConfig {
    let flag = |section: &str, key: &str| {
        config
            .get(section)
            .and_then(Value::as_object)
            .and_then(|section| section.get(key))
            .and_then(Value::as_bool)
    };
    QuizConfig {
        learning_mode: flag("learning_mode", "instant_feedback"),
        slides_mode: flag("slides_mode", "enabled"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizbook_types::Letter;
    use serde_json::json;

    fn options() -> LoadOptions {
        LoadOptions::default()
    }

    #[test]
    fn legacy_list_is_titled_after_source() {
        let doc = json!([{"question": "Q1", "answer": "A"}]);
        let quiz = load(&doc, "chapter3.json", &options()).unwrap();
        assert_eq!(quiz.title, "chapter3");
        assert!(quiz.metadata.is_empty());
        assert_eq!(quiz.config, QuizConfig::default());
    }

    #[test]
    fn wrapped_document_reads_metadata_and_config() {
        let doc = json!({
            "metadata": {"title": "Search Algorithms", "version": 2, "author": "AJ"},
            "config": {
                "learning_mode": {"instant_feedback": true},
                "slides_mode": {"enabled": "yes"}
            },
            "questions": [{"question": "Q1", "answer": "D"}]
        });
        let quiz = load(&doc, "ch3.json", &options()).unwrap();
        assert_eq!(quiz.title, "Search Algorithms");
        assert_eq!(quiz.metadata.get("version").map(String::as_str), Some("2"));
        assert_eq!(quiz.config.learning_mode, Some(true));
        assert_eq!(quiz.config.slides_mode, None);
    }

    #[test]
    fn wrapped_without_title_uses_source() {
        let doc = json!({"metadata": {"title": ""}, "questions": [{"question": "Q", "answer": "A"}]});
        let quiz = load(&doc, "dir/ch4.v2.json", &options()).unwrap();
        assert_eq!(quiz.title, "ch4.v2");
    }

    #[test]
    fn malformed_roots_fail() {
        assert!(matches!(
            load(&json!("just text"), "x", &options()),
            Err(LoadError::UnsupportedRoot)
        ));
        assert!(matches!(
            load(&json!({"questions": {}}), "x", &options()),
            Err(LoadError::MissingQuestions)
        ));
        assert!(matches!(
            load(&json!({"items": []}), "x", &options()),
            Err(LoadError::MissingQuestions)
        ));
    }

    #[test]
    fn empty_result_fails() {
        assert!(matches!(
            load(&json!({"questions": []}), "x", &options()),
            Err(LoadError::NoValidQuestions)
        ));
        assert!(matches!(
            load(&json!([{"question": "no answer"}, 3]), "x", &options()),
            Err(LoadError::NoValidQuestions)
        ));
    }

    #[test]
    fn invalid_entries_are_dropped_in_order() {
        let doc = json!([
            {"question": "Q1", "answer": "A"},
            {"answer": "B"},
            "noise",
            {"question": "Q2", "answer": "C"}
        ]);
        let quiz = load(&doc, "x", &options()).unwrap();
        let texts: Vec<&str> = quiz.questions().iter().map(|q| q.text()).collect();
        assert_eq!(texts, vec!["Q1", "Q2"]);
        assert_eq!(quiz.questions()[1].correct(), Some(Letter::C));
    }

    #[test]
    fn strict_mode_rejects_comments() {
        let text = "[{\"question\": \"Q\", \"answer\": \"A\"}, // trailing\n]";
        assert!(matches!(
            load_str(text, "x", &options().strict()),
            Err(LoadError::Json(_))
        ));
        assert_eq!(load_str(text, "x", &options()).unwrap().len(), 1);
    }
}
