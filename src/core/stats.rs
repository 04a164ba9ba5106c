use serde::{Serialize, Deserialize};

/// Index statistics snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexStats {
    pub word_count: usize,
    pub document_count: usize,

    // Pipeline health
    pub pending_documents: usize,
    pub store_failures: u64,
}
