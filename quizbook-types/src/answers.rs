use std::collections::HashMap;

use crate::Letter;

/// Answers recorded during a session, keyed by zero-based question index.
///
/// A recorded `None` is a cleared choice. It is kept, but counts as
/// unanswered exactly like a missing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: HashMap<usize, Option<Letter>>,
}

impl Answers {
    /// Create an empty answer set.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Record a choice (or a cleared choice) for a question.
    pub fn insert(&mut self, index: usize, choice: Option<Letter>) {
        self.values.insert(index, choice);
    }

    /// Get the chosen letter for a question, if it has a non-empty answer.
    pub fn get(&self, index: usize) -> Option<Letter> {
        self.values.get(&index).copied().flatten()
    }

    /// Check whether an entry was recorded at all, including cleared ones.
    pub fn contains(&self, index: usize) -> bool {
        self.values.contains_key(&index)
    }

    /// Check whether a question has a non-empty answer.
    pub fn has_value(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Number of questions with a non-empty answer.
    pub fn answered(&self) -> usize {
        self.values.values().filter(|choice| choice.is_some()).count()
    }

    /// Number of recorded entries, cleared ones included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over non-empty answers in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Letter)> + '_ {
        self.values
            .iter()
            .filter_map(|(index, choice)| choice.map(|letter| (*index, letter)))
    }

    /// Drop every recorded entry.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_choice_is_kept_but_unanswered() {
        let mut answers = Answers::new();
        answers.insert(0, Some(Letter::B));
        answers.insert(0, None);

        assert!(answers.contains(0));
        assert!(!answers.has_value(0));
        assert_eq!(answers.answered(), 0);
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn iter_skips_cleared_entries() {
        let mut answers = Answers::new();
        answers.insert(0, Some(Letter::A));
        answers.insert(1, None);
        answers.insert(2, Some(Letter::D));

        let mut seen: Vec<_> = answers.iter().collect();
        seen.sort();
        assert_eq!(seen, vec![(0, Letter::A), (2, Letter::D)]);
    }

    #[test]
    fn clear_drops_cleared_entries_too() {
        let mut answers = Answers::new();
        answers.insert(0, Some(Letter::C));
        answers.insert(3, None);

        answers.clear();
        assert!(answers.is_empty());
        assert!(!answers.contains(3));
        assert_eq!(answers, Answers::new());
    }
}
