//! Backtracking search for letter-disjoint word combinations.
//!
//! The engine walks the trie one letter at a time. Whenever the walk lands on
//! a word that shares no letter with the combination built so far, it takes
//! the word and starts spelling the next one from the root. A combination is
//! emitted as soon as it holds `k` words.
//!
//! Members of a combination are kept in ascending dictionary order, so each
//! set of words is found once rather than once per permutation.

use crate::debug_log;
use crate::mask::{ALPHABET_LEN, LetterMask};
use crate::partition::WorkUnit;
use crate::trie::{Trie, TrieNode, WordId};

/// Words per combination when the caller does not say otherwise.
pub const DEFAULT_COMBINATION_SIZE: usize = 5;

/// Word ids chosen along one search path and the letters they use.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination {
    words: Vec<WordId>,
    used: LetterMask,
}

impl Combination {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a combination from ids in ascending order, checking every
    /// member against the letters already used. `None` if an id is unknown
    /// to `trie`, out of order, or shares a letter with an earlier member.
    pub fn from_ids(trie: &Trie, ids: &[WordId]) -> Option<Self> {
        ids.iter().try_fold(Combination::new(), |combination, &id| {
            let mask = trie.get(id)?.mask();
            combination.accepts(id, mask).then(|| combination.with(id, mask))
        })
    }

    /// Ids in the order they were taken (ascending).
    #[must_use]
    pub fn ids(&self) -> &[WordId] {
        &self.words
    }

    #[must_use]
    pub fn used(&self) -> LetterMask {
        self.used
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Smallest id the next member may have.
    #[must_use]
    pub fn next_id(&self) -> WordId {
        self.words.last().map_or(0, |&last| last + 1)
    }

    /// Whether word `id` with letters `mask` may join this combination.
    #[must_use]
    pub fn accepts(&self, id: WordId, mask: LetterMask) -> bool {
        id >= self.next_id() && self.used.is_disjoint(mask)
    }

    /// A copy of this combination with one more member.
    #[must_use]
    pub fn with(&self, id: WordId, mask: LetterMask) -> Self {
        debug_assert!(self.accepts(id, mask));
        let mut words = Vec::with_capacity(self.words.len() + 1);
        words.extend_from_slice(&self.words);
        words.push(id);
        Combination {
            words,
            used: self.used | mask,
        }
    }

    /// Member words as text.
    #[must_use]
    pub fn words<'t>(&self, trie: &'t Trie) -> Vec<&'t str> {
        self.words.iter().map(|&id| trie.word(id).text()).collect()
    }
}

/// One frame of the walk: where we are in the trie, what has been spelled
/// since the last completed word, and the combination it would extend.
#[derive(Debug, Clone)]
pub struct SearchState<'t, 'c> {
    pub node: &'t TrieNode,
    pub prefix: String,
    pub combination: &'c Combination,
}

impl<'t, 'c> SearchState<'t, 'c> {
    /// Start spelling a fresh word from the root.
    #[must_use]
    pub fn at_root(trie: &'t Trie, combination: &'c Combination) -> Self {
        SearchState {
            node: trie.root(),
            prefix: String::new(),
            combination,
        }
    }

    fn extend(&self, letter: u8, child: &'t TrieNode) -> Self {
        let mut prefix = String::with_capacity(self.prefix.len() + 1);
        prefix.push_str(&self.prefix);
        prefix.push(char::from(letter));
        SearchState {
            node: child,
            prefix,
            combination: self.combination,
        }
    }
}

pub struct SearchEngine<'t> {
    trie: &'t Trie,
    k: usize,
}

impl<'t> SearchEngine<'t> {
    #[must_use]
    pub fn new(trie: &'t Trie, k: usize) -> Self {
        Self { trie, k }
    }

    #[must_use]
    pub fn trie(&self) -> &'t Trie {
        self.trie
    }

    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// False when no combination of size `k` can exist: `k` is zero, there
    /// are fewer than `k` words, or `k` words would need more than the
    /// alphabet's letters.
    #[must_use]
    pub fn is_satisfiable(&self) -> bool {
        self.k > 0 && self.k <= self.trie.len() && self.k <= ALPHABET_LEN
    }

    /// Every combination in the dictionary, on the calling thread.
    #[must_use]
    pub fn search(&self) -> Vec<Combination> {
        let empty = Combination::new();
        self.search_from(SearchState::at_root(self.trie, &empty))
    }

    /// Combinations whose first word starts with the unit's letter.
    #[must_use]
    pub fn search_unit(&self, unit: &WorkUnit) -> Vec<Combination> {
        let Some(node) = self.trie.root().child(unit.letter) else {
            return Vec::new();
        };
        let empty = Combination::new();
        let state = SearchState {
            node,
            prefix: char::from(unit.letter).to_string(),
            combination: &empty,
        };
        self.search_from(state)
    }

    /// Combinations reachable from `state`, in walk order.
    #[must_use]
    pub fn search_from(&self, state: SearchState<'t, '_>) -> Vec<Combination> {
        let mut found = Vec::new();
        if self.is_satisfiable() && state.combination.len() < self.k {
            self.walk(&state, &mut found);
        } else {
            debug_log!(
                "search skipped: k={}, {} word(s), combination of {}",
                self.k,
                self.trie.len(),
                state.combination.len()
            );
        }
        found
    }

    fn walk(&self, state: &SearchState<'t, '_>, found: &mut Vec<Combination>) {
        let combination = state.combination;

        if let Some(id) = state.node.word() {
            let mask = self.trie.word(id).mask();
            if combination.accepts(id, mask) {
                log::trace!("take '{}' after {:?}", state.prefix, combination.ids());
                let next = combination.with(id, mask);
                if next.len() == self.k {
                    log::trace!("found {:?}", next.words(self.trie));
                    found.push(next);
                } else {
                    self.walk(&SearchState::at_root(self.trie, &next), found);
                }
            }
        }

        let next_id = combination.next_id();
        for (letter, child) in state.node.children() {
            // Nothing below can follow the last word taken, or every word
            // below repeats a used letter.
            if child.max_word().is_none_or(|max| max < next_id)
                || combination.used().contains_letter(letter)
            {
                continue;
            }
            self.walk(&state.extend(letter, child), found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(trie: &Trie, found: &[Combination]) -> Vec<Vec<String>> {
        found
            .iter()
            .map(|c| c.words(trie).into_iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_five_disjoint_words() {
        let trie = Trie::from_words(["fjord", "gucks", "nymph", "vibex", "waltz"]).unwrap();
        let found = SearchEngine::new(&trie, DEFAULT_COMBINATION_SIZE).search();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].ids(), &[0, 1, 2, 3, 4]);
        assert_eq!(found[0].used().count(), 25);
    }

    #[test]
    fn test_overlapping_pairs_are_excluded() {
        let trie = Trie::from_words(["cat", "car", "bat", "bar"]).unwrap();
        let found = SearchEngine::new(&trie, 2).search();
        let mut words = texts(&trie, &found);
        words.sort();
        assert_eq!(words, vec![vec!["car", "bat"], vec!["cat", "bar"]]);
    }

    #[test]
    fn test_walk_order_takes_word_before_extending() {
        // "ab" is a word and a prefix of "abc"; "de" pairs with both.
        let trie = Trie::from_words(["de", "abc", "ab"]).unwrap();
        let found = SearchEngine::new(&trie, 2).search();
        assert_eq!(texts(&trie, &found), vec![vec!["de", "ab"], vec!["de", "abc"]]);
    }

    #[test]
    fn test_words_with_repeated_letters_can_combine() {
        let trie = Trie::from_words(["book", "tent"]).unwrap();
        let found = SearchEngine::new(&trie, 2).search();
        assert_eq!(texts(&trie, &found), vec![vec!["book", "tent"]]);
    }

    #[test]
    fn test_single_word_combinations() {
        let trie = Trie::from_words(["cat", "car", "bat"]).unwrap();
        let found = SearchEngine::new(&trie, 1).search();
        let mut ids: Vec<Vec<WordId>> = found.iter().map(|c| c.ids().to_vec()).collect();
        ids.sort();
        assert_eq!(ids, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_degenerate_sizes_are_empty() {
        let trie = Trie::from_words(["cat", "dog"]).unwrap();
        assert!(SearchEngine::new(&trie, 0).search().is_empty());
        assert!(SearchEngine::new(&trie, 3).search().is_empty());
        assert!(SearchEngine::new(&trie, 27).search().is_empty());
        assert!(!SearchEngine::new(&trie, 27).is_satisfiable());
    }

    #[test]
    fn test_empty_dictionary() {
        let trie = Trie::new();
        for k in 0..4 {
            assert!(SearchEngine::new(&trie, k).search().is_empty());
        }
    }

    #[test]
    fn test_search_unit_covers_first_letter_only() {
        let trie = Trie::from_words(["cat", "dog", "fix"]).unwrap();
        let engine = SearchEngine::new(&trie, 2);
        let unit = WorkUnit { index: 1, letter: b'd' };
        let found = engine.search_unit(&unit);
        assert_eq!(texts(&trie, &found), vec![vec!["dog", "fix"]]);

        let missing = WorkUnit { index: 9, letter: b'z' };
        assert!(engine.search_unit(&missing).is_empty());
    }

    #[test]
    fn test_search_from_partial_combination() {
        let trie = Trie::from_words(["cat", "dog", "fix", "hen"]).unwrap();
        let engine = SearchEngine::new(&trie, 3);
        let start = Combination::from_ids(&trie, &[1]).unwrap();
        let found = engine.search_from(SearchState::at_root(&trie, &start));
        assert_eq!(texts(&trie, &found), vec![vec!["dog", "fix", "hen"]]);
    }

    #[test]
    fn test_from_ids_rejects_overlap_and_disorder() {
        let trie = Trie::from_words(["cat", "car", "dog"]).unwrap();
        assert!(Combination::from_ids(&trie, &[0, 1]).is_none());
        assert!(Combination::from_ids(&trie, &[2, 0]).is_none());
        let ok = Combination::from_ids(&trie, &[0, 2]).unwrap();
        assert_eq!(ok.used(), LetterMask::of("catdog"));
    }

    #[test]
    fn test_from_ids_rejects_unknown_id() {
        let trie = Trie::from_words(["cat", "dog"]).unwrap();
        assert!(Combination::from_ids(&trie, &[0, 99]).is_none());
        assert!(Combination::from_ids(&trie, &[2]).is_none());
        assert!(Combination::from_ids(&Trie::new(), &[0]).is_none());
    }

    #[test]
    fn test_search_is_deterministic() {
        let words = ["abc", "def", "ghi", "adg", "beh", "cfi", "xyz", "jkl"];
        let trie = Trie::from_words(words).unwrap();
        let engine = SearchEngine::new(&trie, 3);
        assert_eq!(engine.search(), engine.search());
    }
}
