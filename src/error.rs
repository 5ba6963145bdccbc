use std::fmt;

use crate::search::Combination;

/// A dictionary entry the trie refuses to store.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("empty word")]
    Empty,
    #[error("word '{word}' contains {letter:?}, expected only a-z")]
    InvalidLetter { word: String, letter: char },
}

/// A work unit whose search did not run to completion.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unit {unit} (words starting with '{letter}') failed: {message}")]
pub struct UnitFailure {
    pub unit: usize,
    pub letter: char,
    pub message: String,
}

/// Renders failures as "; <failure>; <failure>" after the summary line.
struct FailureList<'a>(&'a [UnitFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in self.0 {
            write!(f, "; {failure}")?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// Some units failed. `partial` holds everything the other units found.
    #[error(
        "results incomplete: {} unit(s) failed, {} combination(s) recovered{}",
        .failures.len(),
        .partial.len(),
        FailureList(.failures)
    )]
    Incomplete {
        failures: Vec<UnitFailure>,
        partial: Vec<Combination>,
    },
    /// The worker pool could not be started.
    #[error("failed to start worker pool: {0}")]
    Pool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_error_display() {
        let err = WordError::InvalidLetter {
            word: "ca7".to_string(),
            letter: '7',
        };
        assert_eq!(err.to_string(), "word 'ca7' contains '7', expected only a-z");
        assert_eq!(WordError::Empty.to_string(), "empty word");
    }

    #[test]
    fn test_incomplete_display_lists_failures() {
        let err = SearchError::Incomplete {
            failures: vec![
                UnitFailure {
                    unit: 2,
                    letter: 'c',
                    message: "boom".to_string(),
                },
                UnitFailure {
                    unit: 4,
                    letter: 'f',
                    message: "bad".to_string(),
                },
            ],
            partial: Vec::new(),
        };
        assert_eq!(
            err.to_string(),
            "results incomplete: 2 unit(s) failed, 0 combination(s) recovered; \
             unit 2 (words starting with 'c') failed: boom; \
             unit 4 (words starting with 'f') failed: bad"
        );
    }

    #[test]
    fn test_pool_error_display() {
        let err = SearchError::Pool("no threads".to_string());
        assert_eq!(err.to_string(), "failed to start worker pool: no threads");
    }

    #[test]
    fn test_errors_convert_into_anyhow() {
        let err: anyhow::Error = WordError::Empty.into();
        assert_eq!(err.to_string(), "empty word");
        assert!(err.downcast_ref::<WordError>().is_some());
    }
}
