use std::collections::HashMap;
use parking_lot::RwLock;
use crate::core::error::{Error, Result};
use crate::core::types::DocId;

/// Raw content persistence, keyed by document id.
///
/// The index only ever calls `dump`, once per indexed document and always
/// with a fresh id, so implementations see no concurrent writes to one key.
pub trait DocumentStore: Send + Sync {
    fn dump(&self, id: DocId, content: &str) -> Result<()>;

    fn load(&self, id: DocId) -> Result<String>;

    fn name(&self) -> &str;
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl DocumentStore for NullStore {
    fn dump(&self, _id: DocId, _content: &str) -> Result<()> {
        Ok(())
    }

    fn load(&self, _id: DocId) -> Result<String> {
        Ok(String::new())
    }

    fn name(&self) -> &str {
        "null"
    }
}

/// Keeps every document's content in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RwLock<HashMap<DocId, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn len(&self) -> usize {
        self.contents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.read().is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn dump(&self, id: DocId, content: &str) -> Result<()> {
        self.contents.write().insert(id, content.to_string());
        Ok(())
    }

    fn load(&self, id: DocId) -> Result<String> {
        self.contents
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("document {} not in store", id.value())))
    }

    fn name(&self) -> &str {
        "memory"
    }
}
