use crate::{Modes, QuizSession};

/// Trait for presentation layers that let a user take a quiz.
///
/// A backend receives a freshly started session and drives it with the
/// session's operations (`record_answer`, `advance`, `retreat`,
/// `jump_to_first_unanswered`) until the user submits. Scoring and
/// report handling happen after `conduct` returns.
pub trait QuizBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Let the user work through the session.
    ///
    /// # Arguments
    /// * `session` - The session to mutate; positioned at the first question
    /// * `modes` - Learning and slides toggles, already merged with the quiz config
    ///
    /// # Returns
    /// * `Ok(())` once the user submits
    /// * `Err` on cancellation or backend failure
    fn conduct(&self, session: &mut QuizSession, modes: Modes) -> Result<(), Self::Error>;
}
