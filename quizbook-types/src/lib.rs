//! Core types for the quizbook crate.
//!
//! This crate provides the presentation-agnostic quiz model:
//! - `Letter` - The four answer choices and answer-field normalization
//! - `QuestionRecord` and `Quiz` - Normalized questions and the canonical quiz
//! - `QuizSession` and `Answers` - Navigation and recorded choices
//! - `ScoreReport` - Scoring and the plain-text report
//! - `QuizBackend` trait - For implementing presentation layers

mod letter;
pub use letter::Letter;

mod question;
pub use question::{QuestionRecord, label_options};

mod quiz;
pub use quiz::{Metadata, Modes, Quiz, QuizConfig};

mod answers;
pub use answers::Answers;

mod session;
pub use session::{Feedback, Progress, QuizSession};

mod score;
pub use score::{ScoreReport, ScoreRow, UNANSWERED, UNKNOWN};

mod error;
pub use error::QuizError;

mod traits;
pub use traits::QuizBackend;
