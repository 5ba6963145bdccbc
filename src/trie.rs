//! Prefix tree holding the dictionary.
//!
//! Words are numbered by first insertion (`WordId`). Terminal nodes carry the
//! id, and every node remembers the largest id below it so the search can skip
//! subtrees that hold no word later than the last one it took.

use std::collections::BTreeMap;

use crate::error::WordError;
use crate::mask::LetterMask;

/// Dictionary index of a word: its position in insertion order.
pub type WordId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    mask: LetterMask,
}

impl Word {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn mask(&self) -> LetterMask {
        self.mask
    }
}

#[derive(Debug, Default)]
pub struct TrieNode {
    children: BTreeMap<u8, TrieNode>,
    word: Option<WordId>,
    max_word: Option<WordId>,
}

impl TrieNode {
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.word.is_some()
    }

    /// Id of the word spelled by the path to this node, if any.
    #[must_use]
    pub fn word(&self) -> Option<WordId> {
        self.word
    }

    /// Largest word id stored in this subtree, this node included.
    #[must_use]
    pub fn max_word(&self) -> Option<WordId> {
        self.max_word
    }

    #[must_use]
    pub fn child(&self, letter: u8) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// Children in alphabetical order.
    pub fn children(&self) -> impl Iterator<Item = (u8, &TrieNode)> {
        self.children.iter().map(|(&letter, child)| (letter, child))
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    words: Vec<Word>,
}

fn validate(word: &str) -> Result<(), WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    match word.chars().find(|c| !c.is_ascii_lowercase()) {
        Some(letter) => Err(WordError::InvalidLetter {
            word: word.to_string(),
            letter,
        }),
        None => Ok(()),
    }
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie from `words`, stopping at the first invalid entry.
    pub fn from_words<I, S>(words: I) -> Result<Self, WordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref())?;
        }
        Ok(trie)
    }

    /// Adds `word` and returns its id. Inserting a word twice returns the
    /// original id and leaves the trie untouched.
    pub fn insert(&mut self, word: &str) -> Result<WordId, WordError> {
        validate(word)?;
        if let Some(id) = self.find(word).and_then(TrieNode::word) {
            return Ok(id);
        }

        let id = self.words.len();
        let mut node = &mut self.root;
        node.max_word = Some(id);
        for letter in word.bytes() {
            node = node.children.entry(letter).or_default();
            node.max_word = Some(id);
        }
        node.word = Some(id);
        self.words.push(Word {
            text: word.to_string(),
            mask: LetterMask::of(word),
        });
        Ok(id)
    }

    #[must_use]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Node reached by spelling `prefix` from the root.
    #[must_use]
    pub fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .bytes()
            .try_fold(&self.root, |node, letter| node.child(letter))
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(TrieNode::is_word)
    }

    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// # Panics
    /// If `id` was not handed out by this trie.
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id]
    }

    /// The word with id `id`, if this trie handed it out.
    #[must_use]
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
