//! # quizbook-dialoguer
//!
//! Dialoguer backend for quizbook.
//!
//! This crate provides a terminal interface for taking quizzes using the
//! `dialoguer` library. Questions are presented one at a time with a menu
//! of the four choices plus navigation (next, previous, jump to the first
//! unanswered question, submit).
//!
//! ## Example
//!
//! ```rust,ignore
//! use quizbook::{LoadOptions, Modes};
//! use quizbook_dialoguer::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let quiz = quizbook::load_file("quizzes/chapter3.json", &LoadOptions::default())?;
//!     let report = quizbook::take(quiz, Modes::default(), &DialoguerBackend::new())?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{
    Action, DEFAULT_RESULTS_FILE, DialoguerBackend, DialoguerError, MenuItem, feedback_line, menu,
};
