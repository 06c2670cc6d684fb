//! # quizbook
//!
//! Load multiple-choice quizzes from JSON, take them through any backend,
//! and score the result. Backend-agnostic.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quizbook::{LoadOptions, Modes};
//!
//! let quiz = quizbook::load_file("quizzes/chapter3.json", &LoadOptions::default())?;
//! let report = quizbook::take(quiz, Modes::default(), &backend)?;
//! println!("{report}");
//! report.save("quiz_results.txt")?;
//! ```
//!
//! ## Document format
//!
//! Either a list of question objects, or an object with a `questions` list
//! and optional `metadata` and `config`:
//!
//! ```json
//! {
//!   "metadata": { "title": "Chapter 3", "author": "AJ" },
//!   "config": {
//!     "learning_mode": { "instant_feedback": true },
//!     "slides_mode": { "enabled": false }
//!   },
//!   "questions": [
//!     {
//!       "question": "Which search is complete and optimal?",
//!       "options": ["DFS", "BFS with unit costs", "Greedy", "Hill climbing"],
//!       "answer": "B",
//!       "explanation": "BFS finds the shallowest goal."
//!     }
//!   ]
//! }
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement `QuizBackend`:
//! - `quizbook-dialoguer` - step-by-step terminal quiz via dialoguer

// Re-export all types from quizbook-types
pub use quizbook_types::*;

pub mod library;
pub use library::LibraryEntry;

mod loader;
pub use loader::{
    LoadError, LoadOptions, ParseMode, RawDocument, load, load_file, load_str, parse_document,
};

mod record;
pub use record::{LetterMatching, Skip, build_question};

pub mod tolerant;

// Test backend for taking quizzes without user interaction
mod test_backend;
pub use test_backend::{Step, TestBackend, TestBackendError};

/// Take a quiz through a backend and score it.
///
/// The quiz's own config overrides the matching fields of `modes` before
/// the backend sees them.
pub fn take<B: QuizBackend>(
    quiz: Quiz,
    mut modes: Modes,
    backend: &B,
) -> Result<ScoreReport, QuizError> {
    quiz.config.apply(&mut modes);
    let mut session = QuizSession::start(quiz);
    backend.conduct(&mut session, modes).map_err(|err| {
        let err: anyhow::Error = err.into();
        match err.downcast::<QuizError>() {
            Ok(quiz_error) => quiz_error,
            Err(other) => QuizError::Backend(other),
        }
    })?;
    Ok(ScoreReport::score(&session))
}
