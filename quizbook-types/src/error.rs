/// Why taking a quiz stopped before a score could be computed.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// The user left before submitting.
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// The presentation layer failed, e.g. the terminal went away mid-prompt.
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl QuizError {
    /// Wrap a presentation-layer failure.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Whether the quiz ended because the user left it.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_cancelled_counts_as_leaving() {
        assert!(QuizError::Cancelled.is_cancelled());

        let err = QuizError::backend(std::io::Error::other("terminal gone"));
        assert!(!err.is_cancelled());
        assert_eq!(err.to_string(), "Backend error: terminal gone");
    }
}
