use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use crossbeam::channel::{bounded, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use crate::analysis::tokenizer::Tokenizer;
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocumentContent;
use crate::index::state::IndexState;
use crate::parallel::pending::PendingCounter;

/// Two-stage indexing pipeline.
///
/// ```text
/// submit ──▶ [tokenize queue] ──▶ N tokenize workers ──▶ [index queue] ──▶ 1 index worker
/// ```
///
/// Both queues are bounded; a full tokenize queue blocks `submit`. The lone
/// index worker owns every mutation of the dictionary and registry.
pub struct IndexingPipeline {
    sender: RwLock<Option<Sender<DocumentContent>>>,
    pending: Arc<PendingCounter>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl IndexingPipeline {
    pub fn start(
        config: &Config,
        tokenizer: Arc<dyn Tokenizer>,
        state: Arc<IndexState>,
    ) -> Result<Self> {
        config.validate()?;

        let (tokenize_sender, tokenize_receiver) = bounded(config.tokenize_queue_capacity);
        let (index_sender, index_receiver) = bounded(config.index_queue_capacity);
        let pending = Arc::new(PendingCounter::new());

        let mut workers = Vec::with_capacity(config.tokenize_workers + 1);
        for worker_id in 0..config.tokenize_workers {
            let receiver = tokenize_receiver.clone();
            let sender = index_sender.clone();
            let tokenizer = tokenizer.clone();
            let pending = pending.clone();
            workers.push(spawn_worker(format!("bitdex-tokenize-{}", worker_id), move || {
                Self::tokenize_worker(worker_id, tokenizer, receiver, sender, pending);
            })?);
        }
        // The index worker stops once every tokenize worker has dropped its sender.
        drop(index_sender);

        let index_pending = pending.clone();
        workers.push(spawn_worker("bitdex-index".to_string(), move || {
            Self::index_worker(state, index_receiver, index_pending);
        })?);

        tracing::info!(
            tokenize_workers = config.tokenize_workers,
            tokenizer = tokenizer.name(),
            "indexing pipeline started"
        );

        Ok(IndexingPipeline {
            sender: RwLock::new(Some(tokenize_sender)),
            pending,
            workers: Mutex::new(workers),
        })
    }

    /// Queue a document for indexing. Blocks while the tokenize queue is full.
    pub fn submit(&self, unit: DocumentContent) -> Result<()> {
        let sender = self.sender.read().clone();
        let Some(sender) = sender else {
            tracing::warn!(external_id = %unit.external_id, "submission rejected, pipeline is shut down");
            return Err(Error::new(ErrorKind::PipelineClosed, "indexing pipeline is shut down"));
        };

        self.pending.add(1);
        sender.send(unit).map_err(|e| {
            self.pending.done();
            tracing::warn!(external_id = %e.0.external_id, "submission rejected, workers are gone");
            Error::new(ErrorKind::PipelineClosed, "indexing workers have stopped")
        })
    }

    pub fn wait_for_indexing(&self) {
        self.pending.wait();
    }

    pub fn wait_for_indexing_timeout(&self, timeout: Duration) -> bool {
        self.pending.wait_timeout(timeout)
    }

    pub fn pending(&self) -> usize {
        self.pending.get()
    }

    /// Stop accepting documents, drain both queues and join every worker.
    ///
    /// Concurrent callers all return only after the workers are joined.
    pub fn shutdown(&self) {
        let closed = self.sender.write().take().is_some();

        // Joining under the lock makes a concurrent caller wait for the drain.
        let mut workers = self.workers.lock();
        for worker in workers.drain(..) {
            let name = worker.thread().name().unwrap_or("worker").to_string();
            if worker.join().is_err() {
                tracing::error!(worker = %name, "worker panicked");
            }
        }
        if closed {
            tracing::info!("indexing pipeline shut down");
        }
    }

    fn tokenize_worker(
        worker_id: usize,
        tokenizer: Arc<dyn Tokenizer>,
        receiver: Receiver<DocumentContent>,
        sender: Sender<DocumentContent>,
        pending: Arc<PendingCounter>,
    ) {
        while let Ok(mut unit) = receiver.recv() {
            let tokenized = panic::catch_unwind(AssertUnwindSafe(|| tokenizer.tokenize(&unit.content)));
            match tokenized {
                Ok(tokens) => unit.tokens = tokens,
                Err(_) => {
                    tracing::error!(
                        worker_id,
                        external_id = %unit.external_id,
                        tokenizer = tokenizer.name(),
                        "panic while tokenizing document, skipping it"
                    );
                    pending.done();
                    continue;
                }
            }

            if let Err(e) = sender.send(unit) {
                tracing::error!(
                    worker_id,
                    external_id = %e.0.external_id,
                    "index worker is gone, dropping tokenized document"
                );
                pending.done();
                // Release everything still queued so the barrier can settle.
                for unit in receiver.iter() {
                    tracing::error!(worker_id, external_id = %unit.external_id, "dropping queued document");
                    pending.done();
                }
                break;
            }
        }
    }

    fn index_worker(
        state: Arc<IndexState>,
        receiver: Receiver<DocumentContent>,
        pending: Arc<PendingCounter>,
    ) {
        while let Ok(unit) = receiver.recv() {
            let external_id = unit.external_id.clone();
            let token_count = unit.tokens.len();

            match panic::catch_unwind(AssertUnwindSafe(|| state.index_document(unit))) {
                Ok(Ok(id)) => {
                    tracing::debug!(doc_id = id.value(), external_id = %external_id, token_count, "document indexed");
                }
                Ok(Err(e)) => {
                    tracing::error!(external_id = %external_id, error = %e, "document rejected by index");
                }
                Err(_) => {
                    tracing::error!(external_id = %external_id, "panic while indexing document, skipping it");
                }
            }
            pending.done();
        }
    }
}

impl Drop for IndexingPipeline {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn spawn_worker<F>(name: String, f: F) -> Result<JoinHandle<()>>
where
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new()
        .name(name.clone())
        .spawn(f)
        .map_err(|e| Error::new(ErrorKind::Internal, format!("failed to spawn {}: {}", name, e)))
}
