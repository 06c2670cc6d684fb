use std::collections::BTreeMap;

use crate::QuestionRecord;

/// Display-only quiz metadata (title, chapter, author, ...).
///
/// Values are kept as display text; numbers are rendered as written.
pub type Metadata = BTreeMap<String, String>;

/// Metadata keys shown by [`Quiz::about`], in display order, with their labels.
const ABOUT_FIELDS: &[(&str, &str)] = &[
    ("chapter", "Chapter"),
    ("topic", "Topic"),
    ("source", "Source"),
    ("author", "Author"),
    ("version", "Quiz JSON Version"),
    ("created_utc", "Created (UTC)"),
];

/// A canonical, validated quiz.
///
/// Always holds at least one question; the loader refuses to build an
/// empty quiz.
#[derive(Debug, Clone)]
pub struct Quiz {
    /// Title from metadata, or the source name without its extension.
    pub title: String,

    /// Opaque metadata for display.
    pub metadata: Metadata,

    /// Mode defaults requested by the document.
    pub config: QuizConfig,

    /// Questions in document order.
    questions: Vec<QuestionRecord>,
}

impl Quiz {
    /// Create a quiz from its questions.
    ///
    /// Returns `None` if `questions` is empty.
    pub fn new(title: impl Into<String>, questions: Vec<QuestionRecord>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self {
            title: title.into(),
            metadata: Metadata::new(),
            config: QuizConfig::default(),
            questions,
        })
    }

    /// Set the metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the config flags.
    pub fn with_config(mut self, config: QuizConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    /// Get a question by zero-based index.
    pub fn question(&self, index: usize) -> Option<&QuestionRecord> {
        self.questions.get(index)
    }

    /// Number of questions. Never zero.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Lines describing this quiz: title, known metadata fields, question count.
    pub fn about(&self) -> Vec<String> {
        let title = self
            .metadata
            .get("title")
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.title);

        let mut lines = vec![title.clone()];
        for (key, label) in ABOUT_FIELDS {
            if let Some(value) = self.metadata.get(*key) {
                lines.push(format!("{label}: {value}"));
            }
        }
        lines.push(format!("Total questions: {}", self.len()));
        lines
    }
}

/// Mode defaults carried by a document's `config` section.
///
/// `None` means the document did not express a preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizConfig {
    /// `config.learning_mode.instant_feedback`
    pub learning_mode: Option<bool>,

    /// `config.slides_mode.enabled`
    pub slides_mode: Option<bool>,
}

impl QuizConfig {
    /// Override the modes the document has an opinion on.
    pub fn apply(&self, modes: &mut Modes) {
        if let Some(learning) = self.learning_mode {
            modes.learning = learning;
        }
        if let Some(slides) = self.slides_mode {
            modes.slides = slides;
        }
    }
}

/// Presentation toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modes {
    /// Show correctness right after each selection.
    pub learning: bool,

    /// Reveal the answer and explanation of the current question.
    pub slides: bool,
}
