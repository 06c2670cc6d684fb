//! Listing the quizzes in a folder.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::loader::{self, LoadError, ParseMode, RawDocument};

/// Conventional library folder name, looked up relative to a base directory.
pub const DEFAULT_DIR_NAME: &str = "quizzes";

/// A quiz file found in a library folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    /// Metadata title, or the file name.
    pub title: String,
    pub path: PathBuf,
}

/// `base/quizzes` if that folder exists, otherwise `base`.
pub fn default_dir(base: impl AsRef<Path>) -> PathBuf {
    let base = base.as_ref();
    let candidate = base.join(DEFAULT_DIR_NAME);
    if candidate.is_dir() {
        candidate
    } else {
        base.to_path_buf()
    }
}

/// List `*.json` files in `dir` (non-recursive), sorted by path.
///
/// Files that cannot be read or parsed are still listed under their file
/// name; loading them later reports the actual problem.
pub fn scan(dir: impl AsRef<Path>) -> Result<Vec<LibraryEntry>, LoadError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| LibraryEntry {
            title: title_of(&path),
            path,
        })
        .collect())
}

fn title_of(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let document = match loader::read_text(path)
        .and_then(|text| loader::parse_document(&text, ParseMode::Tolerant))
    {
        Ok(document) => document,
        Err(err) => {
            warn!("{err}");
            return file_name;
        }
    };

    match RawDocument::classify(&document) {
        Ok(raw) => raw.title().unwrap_or(file_name),
        Err(_) => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir_prefers_quizzes_folder() {
        let base = tempfile::tempdir().unwrap();
        assert_eq!(default_dir(base.path()), base.path());

        fs::create_dir(base.path().join("quizzes")).unwrap();
        assert_eq!(default_dir(base.path()), base.path().join("quizzes"));
    }

    #[test]
    fn missing_folder_is_an_io_error() {
        let base = tempfile::tempdir().unwrap();
        assert!(matches!(
            scan(base.path().join("nope")),
            Err(LoadError::Io { .. })
        ));
    }
}
