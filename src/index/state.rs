use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, Document, DocumentContent};
use crate::index::dictionary::WordDictionary;
use crate::index::registry::DocumentRegistry;
use crate::storage::document_store::DocumentStore;

/// Everything the index worker mutates and queries read.
///
/// Only the index worker calls `index_document`, which makes id allocation a
/// total order and keeps dictionary updates race-free.
pub struct IndexState {
    pub words: WordDictionary,
    pub documents: DocumentRegistry,
    pub store: Arc<dyn DocumentStore>,
    next_id: AtomicU32,
    indexed: AtomicU32,
    store_failures: AtomicU64,
}

impl IndexState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        IndexState {
            words: WordDictionary::new(),
            documents: DocumentRegistry::new(),
            store,
            next_id: AtomicU32::new(0),
            indexed: AtomicU32::new(0),
            store_failures: AtomicU64::new(0),
        }
    }

    /// Number of ids handed out so far, i.e. `last_assigned_id + 1`.
    pub fn assigned_ids(&self) -> u32 {
        self.next_id.load(Ordering::Acquire)
    }

    /// Watermark of fully indexed ids: every id below it has its postings
    /// set and its document registered. Ids are indexed in allocation order,
    /// so once the pipeline is idle this equals `assigned_ids`.
    pub fn indexed_ids(&self) -> u32 {
        self.indexed.load(Ordering::Acquire)
    }

    pub fn store_failures(&self) -> u64 {
        self.store_failures.load(Ordering::Relaxed)
    }

    /// The last representable id is never handed out, so `id + 1` always
    /// fits the watermark.
    fn allocate_id(&self) -> Result<DocId> {
        self.next_id
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |next| next.checked_add(1))
            .map(DocId)
            .map_err(|next| Error::new(ErrorKind::IdsExhausted, format!("no document id left after {}", next)))
    }

    /// Index one tokenized unit: allocate its id, persist the raw content,
    /// set postings for every token, then register the document.
    ///
    /// A store failure is logged and counted; the document is still indexed.
    /// Fails only once the id space is used up.
    pub fn index_document(&self, unit: DocumentContent) -> Result<DocId> {
        let id = self.allocate_id()?;

        if let Err(e) = self.store.dump(id, &unit.content) {
            self.store_failures.fetch_add(1, Ordering::Relaxed);
            tracing::error!(
                doc_id = id.value(),
                external_id = %unit.external_id,
                store = self.store.name(),
                error = %e,
                "failed to persist document content"
            );
        }

        for token in &unit.tokens {
            self.words.get_or_create(token).add_document(id);
        }

        self.documents.register(Document::new(id, unit.external_id));
        self.indexed.store(id.value() + 1, Ordering::Release);
        Ok(id)
    }

    #[cfg(test)]
    fn with_next_id(store: Arc<dyn DocumentStore>, next_id: u32) -> Self {
        let state = IndexState::new(store);
        state.next_id.store(next_id, Ordering::Release);
        state.indexed.store(next_id, Ordering::Release);
        state
    }
}
