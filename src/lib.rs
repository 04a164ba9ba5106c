pub mod core;
pub mod storage;
pub mod analysis;
pub mod index;
pub mod query;
pub mod parallel;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::index::Index;
pub use crate::core::stats::IndexStats;
pub use crate::core::types::{DocId, Document};
pub use crate::query::ast::Query;
pub use crate::storage::document_store::{DocumentStore, MemoryStore, NullStore};
pub use crate::storage::file_store::FileStore;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                            BITDEX STRUCT ARCHITECTURE                        │
└──────────────────────────────────────────────────────────────────────────────┘

  struct Index
  ├── config: Config                       // queue capacities, worker count
  ├── state: Arc<IndexState>
  │   ├── words: WordDictionary            // token → Arc<Word>
  │   │   └── Word { token, postings: RwLock<RoaringBitmap> }
  │   ├── documents: DocumentRegistry      // DocId → Document
  │   ├── store: Arc<dyn DocumentStore>    // Null / Memory / File
  │   ├── next_id: AtomicU32               // id allocator
  │   └── store_failures: AtomicU64
  └── pipeline: IndexingPipeline
      ├── sender ──▶ bounded(16) ──▶ tokenize workers × 5
      │                                   │
      │                                   ▼
      │                             bounded(16) ──▶ index worker × 1
      └── pending: PendingCounter          // wait_for_indexing barrier

  Query path:
    Index::query(&Query)
      └── QueryExecutor { words, universe = assigned ids }
            ├── Word   → postings clone
            ├── And    → intersection
            ├── Or     → union
            ├── Not    → [0, universe) \ inner
            └── Exact  → And-fold over Word
      └── DocumentRegistry::documents_by_ids → Vec<Document> (ascending id)
*/
