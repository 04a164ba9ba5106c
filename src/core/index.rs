use std::sync::Arc;
use std::time::Duration;
use roaring::RoaringBitmap;
use crate::analysis::tokenizer::{StandardTokenizer, Tokenizer};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::IndexStats;
use crate::core::types::{Document, DocumentContent};
use crate::index::state::IndexState;
use crate::parallel::pipeline::IndexingPipeline;
use crate::query::ast::Query;
use crate::query::executor::QueryExecutor;
use crate::storage::document_store::DocumentStore;

/// In-memory boolean full-text index.
///
/// Documents go through a parallel tokenize stage and a single index worker;
/// queries read the dictionary concurrently. Call `wait_for_indexing` before
/// querying to see every document submitted so far.
pub struct Index {
    state: Arc<IndexState>,
    pipeline: IndexingPipeline,
}

impl Index {
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Result<Self> {
        Self::with_tokenizer(config, store, Arc::new(StandardTokenizer))
    }

    pub fn with_tokenizer(
        config: Config,
        store: Arc<dyn DocumentStore>,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Result<Self> {
        let state = Arc::new(IndexState::new(store));
        let pipeline = IndexingPipeline::start(&config, tokenizer, state.clone())?;
        Ok(Index { state, pipeline })
    }

    /// Submit a document. Blocks while the tokenize queue is full.
    pub fn add_document(&self, external_id: impl Into<String>, content: impl Into<String>) -> Result<()> {
        self.pipeline.submit(DocumentContent::new(external_id, content))
    }

    /// Block until every document submitted so far is indexed.
    pub fn wait_for_indexing(&self) {
        self.pipeline.wait_for_indexing();
    }

    pub fn wait_for_indexing_timeout(&self, timeout: Duration) -> bool {
        self.pipeline.wait_for_indexing_timeout(timeout)
    }

    pub fn query(&self, query: &Query) -> Vec<Document> {
        self.documents_by_ids(&self.query_ids(query))
    }

    pub fn query_ids(&self, query: &Query) -> RoaringBitmap {
        QueryExecutor::new(&self.state.words, self.state.indexed_ids()).execute(query)
    }

    /// Documents for every set bit, by ascending id.
    pub fn documents_by_ids(&self, ids: &RoaringBitmap) -> Vec<Document> {
        self.state.documents.documents_by_ids(ids)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            word_count: self.state.words.len(),
            document_count: self.state.documents.len(),
            pending_documents: self.pipeline.pending(),
            store_failures: self.state.store_failures(),
        }
    }

    /// Drain queued documents and stop the workers. Later submissions fail.
    pub fn shutdown(&self) {
        self.pipeline.shutdown();
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.state.store
    }
}
