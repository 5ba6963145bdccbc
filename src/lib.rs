// Library interface for disjoint-words
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mask;
pub mod partition;
pub mod search;
pub mod trie;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use config::SearchConfig;
pub use error::{SearchError, UnitFailure, WordError};
pub use mask::LetterMask;
pub use partition::{NoProgress, Partitioner, Progress, ProgressObserver, WorkUnit, partition};
pub use search::{Combination, DEFAULT_COMBINATION_SIZE, SearchEngine, SearchState};
pub use trie::{Trie, TrieNode, Word, WordId};
pub use wordbank::{load_wordbank, load_wordbank_from_file, load_wordbank_from_str};

/// Finds every combination of `config.k` letter-disjoint words in `trie`,
/// sorted by dictionary order.
pub fn find_combinations<O: ProgressObserver>(
    trie: &Trie,
    config: &SearchConfig,
    observer: &mut O,
) -> Result<Vec<Combination>, SearchError> {
    let engine = SearchEngine::new(trie, config.k);
    if config.serial {
        let mut found = engine.search();
        found.sort_unstable();
        return Ok(found);
    }
    Partitioner::from_config(config).run(&engine, observer)
}
