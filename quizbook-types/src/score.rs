use std::fmt;
use std::fs;
use std::path::Path;

use crate::{Letter, QuizSession};

/// Placeholder shown for an unanswered question.
pub const UNANSWERED: &str = "-";

/// Placeholder shown when the correct letter is unknown.
pub const UNKNOWN: &str = "?";

/// One row of a score report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRow {
    /// 1-based question position.
    pub position: usize,
    pub chosen: Option<Letter>,
    pub correct: Option<Letter>,
    pub is_correct: bool,
}

impl ScoreRow {
    /// The chosen letter, or `"-"`.
    pub fn chosen_label(&self) -> String {
        self.chosen
            .map_or_else(|| UNANSWERED.to_string(), |l| l.to_string())
    }

    /// The correct letter, or `"?"`.
    pub fn correct_label(&self) -> String {
        self.correct
            .map_or_else(|| UNKNOWN.to_string(), |l| l.to_string())
    }
}

/// Result of scoring a session.
///
/// The `Display` impl renders the plain-text report: a score line, a blank
/// line, a column header and one row per question.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub rows: Vec<ScoreRow>,
    pub correct: usize,
    pub total: usize,
}

impl ScoreReport {
    /// Score every question of a session, in order.
    pub fn score(session: &QuizSession) -> Self {
        let rows: Vec<ScoreRow> = session
            .quiz()
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let chosen = session.answers().get(index);
                ScoreRow {
                    position: index + 1,
                    chosen,
                    correct: question.correct(),
                    is_correct: question.is_correct(chosen),
                }
            })
            .collect();

        let correct = rows.iter().filter(|row| row.is_correct).count();
        let total = rows.len();
        Self {
            rows,
            correct,
            total,
        }
    }

    /// Percentage of correct answers; 0 for an empty report.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.correct as f64 / self.total as f64
        }
    }

    /// The `Score: C/T (P.P%)` line.
    pub fn headline(&self) -> String {
        format!(
            "Score: {}/{} ({:.1}%)",
            self.correct,
            self.total,
            self.percentage()
        )
    }

    /// Write the report text to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        fs::write(path, self.to_string())
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        writeln!(f)?;
        writeln!(f, "#  Your  Correct  ✓/✗")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<2} {:<5} {:<7} {}",
                row.position,
                row.chosen_label(),
                row.correct_label(),
                if row.is_correct { "✓" } else { "✗" }
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuestionRecord, Quiz};

    fn session() -> QuizSession {
        let quiz = Quiz::new(
            "two",
            vec![
                QuestionRecord::new("Q1", Some(Letter::B)),
                QuestionRecord::new("Q2", Some(Letter::C)),
            ],
        )
        .unwrap();
        QuizSession::start(quiz)
    }

    #[test]
    fn half_correct_is_fifty_percent() {
        let mut session = session();
        session.record_answer(Some(Letter::B));

        let report = ScoreReport::score(&session);
        assert_eq!(report.correct, 1);
        assert_eq!(report.total, 2);
        assert_eq!(report.percentage(), 50.0);
        assert_eq!(report.rows[1].chosen, None);
        assert!(!report.rows[1].is_correct);
    }

    #[test]
    fn unknown_correct_letter_never_scores() {
        let quiz = Quiz::new("q", vec![QuestionRecord::new("Q1", None)]).unwrap();
        let mut session = QuizSession::start(quiz);
        session.record_answer(Some(Letter::A));

        let report = ScoreReport::score(&session);
        assert_eq!(report.correct, 0);
        assert_eq!(report.rows[0].correct_label(), "?");
    }

    #[test]
    fn empty_report_is_zero_percent() {
        let report = ScoreReport {
            rows: Vec::new(),
            correct: 0,
            total: 0,
        };
        assert_eq!(report.percentage(), 0.0);
    }

    #[test]
    fn report_text() {
        let mut session = session();
        session.record_answer(Some(Letter::B));

        let text = ScoreReport::score(&session).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Score: 1/2 (50.0%)");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "#  Your  Correct  ✓/✗");
        assert_eq!(lines[3], "1  B     B       ✓");
        assert_eq!(lines[4], "2  -     C       ✗");
    }
}
