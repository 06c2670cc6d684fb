//! Test backend for running quizzes without user interaction.
//!
//! `TestBackend` replays a fixed script of user gestures against a session.
//! This is useful for testing navigation and scoring end to end.
//!
//! # Example
//!
//! ```rust
//! use quizbook::{Letter, LoadOptions, Modes, TestBackend};
//!
//! let quiz = quizbook::load_str(
//!     r#"[{"question": "Q1", "answer": "B"}, {"question": "Q2", "answer": "C"}]"#,
//!     "demo.json",
//!     &LoadOptions::default(),
//! )
//! .unwrap();
//!
//! let report = quizbook::take(
//!     quiz,
//!     Modes::default(),
//!     &TestBackend::new().choose(Letter::B).next().choose(Letter::A),
//! )
//! .unwrap();
//!
//! assert_eq!(report.correct, 1);
//! ```

use quizbook_types::{Letter, Modes, QuizBackend, QuizSession};

/// A single scripted user gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Select a letter for the current question.
    Choose(Letter),
    /// Clear the selection of the current question.
    Clear,
    Next,
    Previous,
    /// Jump to the first unanswered question.
    JumpToUnanswered,
    /// Jump to a zero-based question index.
    GoTo(usize),
}

/// A test backend that replays pre-configured steps, then submits.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    steps: Vec<Step>,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Step {step}: all questions are already answered")]
    AllAnswered { step: usize },

    #[error("Step {step}: no question at index {index}")]
    OutOfRange { step: usize, index: usize },
}

impl TestBackend {
    /// Create a backend that submits immediately.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Select a letter.
    pub fn choose(self, letter: Letter) -> Self {
        self.with_step(Step::Choose(letter))
    }

    /// Clear the selection.
    pub fn clear(self) -> Self {
        self.with_step(Step::Clear)
    }

    /// Go to the next question.
    #[allow(clippy::should_implement_trait)]
    pub fn next(self) -> Self {
        self.with_step(Step::Next)
    }

    /// Go to the previous question.
    pub fn previous(self) -> Self {
        self.with_step(Step::Previous)
    }

    /// Jump to the first unanswered question.
    pub fn jump_to_unanswered(self) -> Self {
        self.with_step(Step::JumpToUnanswered)
    }

    /// Jump to a question index.
    pub fn go_to(self, index: usize) -> Self {
        self.with_step(Step::GoTo(index))
    }

    /// Answer questions in order, moving forward after each.
    ///
    /// `None` leaves that question unanswered.
    pub fn answering<I>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = Option<Letter>>,
    {
        for choice in choices {
            if let Some(letter) = choice {
                self.steps.push(Step::Choose(letter));
            }
            self.steps.push(Step::Next);
        }
        self
    }

    /// The configured steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl QuizBackend for TestBackend {
    type Error = TestBackendError;

    fn conduct(&self, session: &mut QuizSession, _modes: Modes) -> Result<(), Self::Error> {
        for (i, step) in self.steps.iter().enumerate() {
            let step_number = i + 1;
            match *step {
                Step::Choose(letter) => session.record_answer(Some(letter)),
                Step::Clear => session.record_answer(None),
                Step::Next => {
                    session.advance();
                }
                Step::Previous => {
                    session.retreat();
                }
                Step::JumpToUnanswered => {
                    if session.jump_to_first_unanswered().is_none() {
                        return Err(TestBackendError::AllAnswered { step: step_number });
                    }
                }
                Step::GoTo(index) => {
                    if !session.go_to(index) {
                        return Err(TestBackendError::OutOfRange {
                            step: step_number,
                            index,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
