//! Dialoguer backend implementation for QuizBackend trait.

use std::path::PathBuf;

use dialoguer::{Confirm, FuzzySelect, Input, Select, theme::ColorfulTheme};
use quizbook::{
    Feedback, LibraryEntry, Letter, Modes, QuestionRecord, QuizBackend, QuizError, QuizSession,
};
use thiserror::Error;

/// Default file name offered when saving results.
pub const DEFAULT_RESULTS_FILE: &str = "quiz_results.txt";

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the quiz (e.g., pressed Ctrl+C or Escape).
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl DialoguerError {
    /// Check if the user backed out of a prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<DialoguerError> for QuizError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => QuizError::Cancelled,
            other => QuizError::backend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// What a menu entry does when picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Choose(Letter),
    Clear,
    Next,
    Previous,
    JumpToUnanswered,
    ToggleSlides,
    Submit,
}

/// One line of the per-question menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub action: Action,
}

impl MenuItem {
    fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Build the menu for the current question.
///
/// The four choices come first (the recorded one marked), followed by the
/// navigation entries that apply at this position.
pub fn menu(session: &QuizSession, modes: Modes) -> Vec<MenuItem> {
    let question = session.current_question();
    let chosen = session.current_answer();

    let mut items: Vec<MenuItem> = Letter::ALL
        .iter()
        .zip(question.display_options())
        .map(|(&letter, text)| {
            let label = if chosen == Some(letter) {
                format!("{text}  (selected)")
            } else {
                text
            };
            MenuItem::new(label, Action::Choose(letter))
        })
        .collect();

    if chosen.is_some() {
        items.push(MenuItem::new("Clear answer", Action::Clear));
    }
    if session.has_next() {
        items.push(MenuItem::new("Next ▶", Action::Next));
    }
    if session.has_previous() {
        items.push(MenuItem::new("◀ Previous", Action::Previous));
    }
    items.push(MenuItem::new("Jump to unanswered", Action::JumpToUnanswered));
    items.push(MenuItem::new(
        format!("Slides mode: {}", if modes.slides { "ON" } else { "OFF" }),
        Action::ToggleSlides,
    ));
    items.push(MenuItem::new("Submit", Action::Submit));
    items
}

/// Learning-mode message for a verdict.
pub fn feedback_line(question: &QuestionRecord, feedback: Feedback) -> String {
    match feedback {
        Feedback::Correct => "✓ Correct".to_string(),
        Feedback::Incorrect { correct } => {
            format!("✗ Incorrect. Correct: {}", question.option_text(correct))
        }
        Feedback::Undeterminable => "No correct answer is recorded for this question.".to_string(),
    }
}

/// Dialoguer backend for taking a quiz in the terminal.
///
/// Each question is shown with its progress line and a menu of the four
/// choices plus navigation. Learning mode prints a verdict after each
/// choice; slides mode prints the answer and explanation above the menu.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Let the user pick a quiz from a library listing.
    ///
    /// Returns `None` if the listing is empty.
    pub fn pick(&self, entries: &[LibraryEntry]) -> Result<Option<PathBuf>, DialoguerError> {
        if entries.is_empty() {
            return Ok(None);
        }
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();

        let _theme;
        let mut builder: FuzzySelect;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = FuzzySelect::with_theme(&_theme);
        } else {
            builder = FuzzySelect::new();
        }
        builder = builder.with_prompt("Quiz library").items(&titles).default(0);

        match builder.interact_opt().map_err(prompt_error)? {
            Some(index) => Ok(Some(entries[index].path.clone())),
            None => Err(DialoguerError::Cancelled),
        }
    }

    /// Ask whether to save the results and where.
    pub fn ask_save_path(&self) -> Result<Option<PathBuf>, DialoguerError> {
        if !self.confirm("Save results to file?", false)? {
            return Ok(None);
        }

        let _theme;
        let builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }
        let path = builder
            .with_prompt("Save as")
            .default(DEFAULT_RESULTS_FILE.to_string())
            .interact_text()
            .map_err(prompt_error)?;
        Ok(Some(PathBuf::from(path)))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, DialoguerError> {
        let _theme;
        let builder: Confirm;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Confirm::with_theme(&_theme);
        } else {
            builder = Confirm::new();
        }
        builder
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn choose_action(&self, items: &[MenuItem], cursor: usize) -> Result<Action, DialoguerError> {
        let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();

        let _theme;
        let mut builder: Select;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }
        builder = builder.items(&labels).default(cursor);

        match builder.interact_opt().map_err(prompt_error)? {
            Some(index) => Ok(items[index].action),
            None => Err(DialoguerError::Cancelled),
        }
    }

    fn show_question(&self, session: &QuizSession, modes: Modes) {
        let question = session.current_question();
        println!();
        println!("{}", session.progress());
        println!();
        println!("{}", question.text());
        if modes.slides {
            println!();
            println!("{}", question.reveal());
            if !question.explanation().is_empty() {
                println!("{}", question.explanation());
            }
        }
    }

    fn run(&self, session: &mut QuizSession, mut modes: Modes) -> Result<(), DialoguerError> {
        if modes.learning {
            println!("Learning Mode: every choice is checked immediately.");
        }

        loop {
            self.show_question(session, modes);

            let items = menu(session, modes);
            let cursor = session.current_answer().map_or(0, Letter::index);

            match self.choose_action(&items, cursor)? {
                Action::Choose(letter) => {
                    session.record_answer(Some(letter));
                    if modes.learning
                        && let Some(feedback) = session.feedback()
                    {
                        println!("{}", feedback_line(session.current_question(), feedback));
                    }
                }
                Action::Clear => session.record_answer(None),
                Action::Next => {
                    session.advance();
                }
                Action::Previous => {
                    session.retreat();
                }
                Action::JumpToUnanswered => {
                    if session.jump_to_first_unanswered().is_none() {
                        println!("All questions have an answer selected.");
                    }
                }
                Action::ToggleSlides => modes.slides = !modes.slides,
                Action::Submit => {
                    let unanswered = session.unanswered();
                    if unanswered.is_empty() {
                        return Ok(());
                    }
                    let prompt = format!(
                        "You have unanswered questions: {unanswered:?}. Submit anyway?"
                    );
                    if self.confirm(&prompt, false)? {
                        return Ok(());
                    }
                }
            }
        }
    }
}

impl QuizBackend for DialoguerBackend {
    type Error = QuizError;

    fn conduct(&self, session: &mut QuizSession, modes: Modes) -> Result<(), Self::Error> {
        Ok(self.run(session, modes)?)
    }
}
