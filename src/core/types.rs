use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u32);

impl DocId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// An indexed document. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub external_id: String,
}

impl Document {
    pub fn new(id: DocId, external_id: impl Into<String>) -> Self {
        Document {
            id,
            external_id: external_id.into(),
        }
    }
}

/// A submitted document travelling through the pipeline.
/// `tokens` is empty until the tokenize stage has run.
#[derive(Debug, Clone)]
pub struct DocumentContent {
    pub external_id: String,
    pub content: String,
    pub tokens: Vec<String>,
}

impl DocumentContent {
    pub fn new(external_id: impl Into<String>, content: impl Into<String>) -> Self {
        DocumentContent {
            external_id: external_id.into(),
            content: content.into(),
            tokens: Vec::new(),
        }
    }
}
