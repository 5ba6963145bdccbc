use crate::search::DEFAULT_COMBINATION_SIZE;

/// Word length the search looks at unless told otherwise.
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Knobs for one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Words per combination.
    pub k: usize,
    /// Worker threads; 0 uses one per CPU.
    pub workers: usize,
    /// Keep only words of this length when loading; `None` keeps all.
    pub word_length: Option<usize>,
    /// Run on the calling thread instead of the worker pool.
    pub serial: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_COMBINATION_SIZE,
            workers: 0,
            word_length: Some(DEFAULT_WORD_LENGTH),
            serial: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.k, 5);
        assert_eq!(config.workers, 0);
        assert_eq!(config.word_length, Some(5));
        assert!(!config.serial);
    }
}
