use std::fmt;
use std::sync::Arc;

use crate::{Answers, Letter, QuestionRecord, Quiz};

/// An in-progress attempt at a quiz.
///
/// Owns the current position and the recorded answers; the quiz itself is
/// shared and read-only. `restart` swaps in another quiz and resets both.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Arc<Quiz>,
    current: usize,
    answers: Answers,
}

impl QuizSession {
    /// Start a session at the first question with no answers.
    pub fn start(quiz: impl Into<Arc<Quiz>>) -> Self {
        Self {
            quiz: quiz.into(),
            current: 0,
            answers: Answers::new(),
        }
    }

    /// Replace the quiz, resetting position and answers.
    pub fn restart(&mut self, quiz: impl Into<Arc<Quiz>>) {
        self.quiz = quiz.into();
        self.current = 0;
        self.answers.clear();
    }

    /// Get the quiz being taken.
    pub fn quiz(&self) -> &Arc<Quiz> {
        &self.quiz
    }

    /// Get the recorded answers.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Zero-based index of the current question.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question at the current position.
    pub fn current_question(&self) -> &QuestionRecord {
        // `current` is kept within bounds and a quiz is never empty.
        &self.quiz.questions()[self.current]
    }

    /// The answer recorded for the current question, if non-empty.
    pub fn current_answer(&self) -> Option<Letter> {
        self.answers.get(self.current)
    }

    /// Record a choice for the current question. `None` clears it.
    pub fn record_answer(&mut self, choice: Option<Letter>) {
        self.answers.insert(self.current, choice);
    }

    /// Move to the next question. Returns `false` at the last question.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.quiz.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous question. Returns `false` at the first question.
    pub fn retreat(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Move to an arbitrary question. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.quiz.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Check whether `advance` would move.
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.quiz.len()
    }

    /// Check whether `retreat` would move.
    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    /// Lowest index without a non-empty answer, or `None` if all are answered.
    pub fn first_unanswered(&self) -> Option<usize> {
        (0..self.quiz.len()).find(|&i| !self.answers.has_value(i))
    }

    /// Move to the first unanswered question and return its index.
    ///
    /// Leaves the position unchanged and returns `None` when every question
    /// is answered; the caller is expected to say so.
    pub fn jump_to_first_unanswered(&mut self) -> Option<usize> {
        let index = self.first_unanswered()?;
        self.current = index;
        Some(index)
    }

    /// 1-based positions of all unanswered questions.
    pub fn unanswered(&self) -> Vec<usize> {
        (0..self.quiz.len())
            .filter(|&i| !self.answers.has_value(i))
            .map(|i| i + 1)
            .collect()
    }

    /// Answered count, total count and 1-based current position.
    pub fn progress(&self) -> Progress {
        Progress {
            answered: (0..self.quiz.len())
                .filter(|&i| self.answers.has_value(i))
                .count(),
            total: self.quiz.len(),
            position: self.current + 1,
        }
    }

    /// Instant feedback on the current question's recorded answer.
    ///
    /// `None` while the question is unanswered.
    pub fn feedback(&self) -> Option<Feedback> {
        let chosen = self.current_answer()?;
        Some(match self.current_question().correct() {
            None => Feedback::Undeterminable,
            Some(correct) if correct == chosen => Feedback::Correct,
            Some(correct) => Feedback::Incorrect { correct },
        })
    }
}

/// Snapshot of how far through the quiz a session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    /// 1-based position of the current question.
    pub position: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Answered {}/{} | Q {}/{}",
            self.answered, self.total, self.position, self.total
        )
    }
}

/// Learning-mode verdict on a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { correct: Letter },
    /// The question has no determinable correct letter.
    Undeterminable,
}
