use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::corpus::CorpusIndex;
use crate::error::Result;
use crate::index::Document;

/// Process-wide handle to the current catalog index.
///
/// Queries take a snapshot and run lock-free against it. A reload builds the
/// replacement outside the lock and swaps it in under the write lock, so
/// in-flight queries keep the index they started with.
pub struct SharedCorpus {
    current: RwLock<Arc<CorpusIndex>>,
    generation: AtomicU64,
}

impl SharedCorpus {
    pub fn new(index: CorpusIndex) -> Self {
        Self { current: RwLock::new(Arc::new(index)), generation: AtomicU64::new(0) }
    }

    pub fn build(docs: &[Document], config: EngineConfig) -> Result<Self> {
        Ok(Self::new(CorpusIndex::build(docs, config)?))
    }

    pub fn snapshot(&self) -> Arc<CorpusIndex> {
        self.current.read().clone()
    }

    /// Rebuilds from `docs`. On error the previous index stays active.
    pub fn reload(&self, docs: &[Document], config: EngineConfig) -> Result<()> {
        let next = Arc::new(CorpusIndex::build(docs, config)?);
        let mut guard = self.current.write();
        *guard = next;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(generation, num_jobs = guard.len(), "catalog reloaded");
        Ok(())
    }

    /// Number of successful reloads since construction.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
