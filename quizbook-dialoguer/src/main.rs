//! quizbook: take a multiple-choice quiz in the terminal.
//!
//! - **file mode**: `quizbook quizzes/chapter3.json`
//! - **library mode**: `quizbook --library quizzes` (or no arguments, which
//!   looks for `./quizzes`)

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use quizbook::{LoadOptions, Modes, library};
use quizbook_dialoguer::{DialoguerBackend, DialoguerError};

#[derive(Parser)]
#[command(name = "quizbook", about = "Take a multiple-choice quiz in the terminal")]
struct Cli {
    /// Quiz JSON file. If omitted, pick one from the library folder.
    file: Option<PathBuf>,

    /// Library folder to pick a quiz from (default: ./quizzes, else .)
    #[arg(short = 'l', long, conflicts_with = "file")]
    library: Option<PathBuf>,

    /// Show whether each choice is correct right away
    #[arg(long)]
    learning: bool,

    /// Show the answer and explanation of every question
    #[arg(long)]
    slides: bool,

    /// Reject comments, trailing commas and other relaxed JSON
    #[arg(long)]
    strict: bool,

    /// Only accept a leading letter ("B", "B) ...") as the correct answer
    #[arg(long)]
    strict_answers: bool,

    /// Write the results here instead of asking
    #[arg(short = 's', long)]
    save: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    plain: bool,
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        let mut options = LoadOptions::default();
        if self.strict {
            options = options.strict();
        }
        if self.strict_answers {
            options = options.leading_letters();
        }
        options
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let backend = if cli.plain {
        DialoguerBackend::plain()
    } else {
        DialoguerBackend::new()
    };

    let path = match &cli.file {
        Some(path) => path.clone(),
        None => {
            let dir = match &cli.library {
                Some(dir) => dir.clone(),
                None => library::default_dir(env::current_dir().context("no working directory")?),
            };
            match pick_from_library(&backend, &dir) {
                Ok(Some(path)) => path,
                Ok(None) => anyhow::bail!("no .json files found in {}", dir.display()),
                Err(err)
                    if err
                        .downcast_ref::<DialoguerError>()
                        .is_some_and(DialoguerError::is_cancelled) =>
                {
                    eprintln!("{err}");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    };

    let quiz = quizbook::load_file(&path, &cli.load_options())
        .with_context(|| format!("failed to load quiz from {}", path.display()))?;

    println!("Loaded {} questions.", quiz.len());
    for line in quiz.about() {
        println!("{line}");
    }

    let modes = Modes {
        learning: cli.learning,
        slides: cli.slides,
    };
    let report = match quizbook::take(quiz, modes, &backend) {
        Ok(report) => report,
        Err(err) if err.is_cancelled() => {
            eprintln!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!();
    print!("{report}");

    let save_path = match cli.save {
        Some(path) => Some(path),
        None => backend.ask_save_path()?,
    };
    if let Some(path) = save_path {
        report
            .save(&path)
            .with_context(|| format!("failed to save results to {}", path.display()))?;
        println!("Saved results to {}", path.display());
    }

    Ok(())
}

fn pick_from_library(backend: &DialoguerBackend, dir: &Path) -> Result<Option<PathBuf>> {
    debug!("scanning library {}", dir.display());
    let entries = library::scan(dir)?;
    println!("Folder: {}", dir.display());
    Ok(backend.pick(&entries)?)
}
