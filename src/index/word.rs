use parking_lot::RwLock;
use roaring::RoaringBitmap;
use crate::core::types::DocId;

/// A distinct token and the set of documents containing it.
/// Postings only grow: bits are set, never cleared.
#[derive(Debug)]
pub struct Word {
    token: String,
    postings: RwLock<RoaringBitmap>,
}

impl Word {
    pub fn new(token: impl Into<String>) -> Self {
        Word {
            token: token.into(),
            postings: RwLock::new(RoaringBitmap::new()),
        }
    }

    /// Build a word with pre-populated postings (used by tests and fixtures).
    pub fn with_postings(token: impl Into<String>, postings: RoaringBitmap) -> Self {
        Word {
            token: token.into(),
            postings: RwLock::new(postings),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn add_document(&self, id: DocId) {
        self.postings.write().insert(id.value());
    }

    pub fn contains(&self, id: DocId) -> bool {
        self.postings.read().contains(id.value())
    }

    /// Consistent copy of the current postings.
    pub fn postings(&self) -> RoaringBitmap {
        self.postings.read().clone()
    }

    pub fn doc_freq(&self) -> u64 {
        self.postings.read().len()
    }
}
