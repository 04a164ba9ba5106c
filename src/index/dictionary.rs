use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::index::word::Word;

/// Token → Word mapping.
///
/// The map is internally synchronized so queries can read while the index
/// worker writes. Mutation still goes through the single index worker; the
/// create-if-absent path runs under one write lock, so a token can never end
/// up with two `Word` instances.
#[derive(Debug, Default)]
pub struct WordDictionary {
    words: RwLock<HashMap<String, Arc<Word>>>,
}

impl WordDictionary {
    pub fn new() -> Self {
        WordDictionary {
            words: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, token: &str) -> Option<Arc<Word>> {
        self.words.read().get(token).cloned()
    }

    /// Insert `word` unless its token is already present.
    /// Returns the Word that ends up in the dictionary.
    pub fn add(&self, word: Word) -> Arc<Word> {
        let mut words = self.words.write();
        words
            .entry(word.token().to_string())
            .or_insert_with(|| Arc::new(word))
            .clone()
    }

    pub fn get_or_create(&self, token: &str) -> Arc<Word> {
        if let Some(word) = self.get(token) {
            return word;
        }
        let mut words = self.words.write();
        words
            .entry(token.to_string())
            .or_insert_with(|| Arc::new(Word::new(token)))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.words.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.read().is_empty()
    }
}
