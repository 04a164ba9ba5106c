use parking_lot::RwLock;
use roaring::RoaringBitmap;
use crate::core::types::{DocId, Document};

/// Document registry: id → Document.
/// Ids are dense, so documents are stored by position.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    slots: RwLock<Slots>,
}

#[derive(Debug, Default)]
struct Slots {
    documents: Vec<Option<Document>>,
    count: usize,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        DocumentRegistry::default()
    }

    pub fn register(&self, document: Document) {
        let slot = document.id.value() as usize;
        let mut slots = self.slots.write();
        if slots.documents.len() <= slot {
            slots.documents.resize(slot + 1, None);
        }
        if slots.documents[slot].replace(document).is_none() {
            slots.count += 1;
        }
    }

    pub fn get(&self, id: DocId) -> Option<Document> {
        self.slots
            .read()
            .documents
            .get(id.value() as usize)
            .and_then(|doc| doc.clone())
    }

    pub fn len(&self) -> usize {
        self.slots.read().count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialize documents for every set bit, ascending by id.
    /// Ids without a registered document are skipped.
    pub fn documents_by_ids(&self, ids: &RoaringBitmap) -> Vec<Document> {
        let slots = self.slots.read();
        let documents = &slots.documents;
        let mut result = Vec::with_capacity(ids.len().min(documents.len() as u64) as usize);
        for id in ids.iter() {
            if let Some(Some(doc)) = documents.get(id as usize) {
                result.push(doc.clone());
            }
        }
        result
    }
}
