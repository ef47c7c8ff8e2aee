//! The persist capability: the one real external effect.
//!
//! `save` hands a file's in-memory content to a `Persist` implementation
//! verbatim: raw content bytes, no header, no metadata. Any suffix rule
//! belongs to the caller, never to the sink itself. `LocalDisk` writes to
//! the host filesystem; `MemorySink` captures writes for tests.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;

/// Writes a named file's content to durable storage.
#[async_trait]
pub trait Persist: Send + Sync {
    async fn persist(&self, filename: &str, content: &str) -> io::Result<()>;
}

/// Persist to the host filesystem under a fixed root directory.
#[derive(Debug)]
pub struct LocalDisk {
    root: PathBuf,
}

impl LocalDisk {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl Persist for LocalDisk {
    async fn persist(&self, filename: &str, content: &str) -> io::Result<()> {
        tokio::fs::write(self.root.join(filename), content).await
    }
}

/// In-memory sink for tests. All writes are inspectable, nothing touches disk.
#[derive(Debug, Default)]
pub struct MemorySink {
    saved: RwLock<HashMap<String, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content last persisted under `filename`, if any.
    pub fn saved(&self, filename: &str) -> Option<String> {
        self.saved
            .read()
            .ok()
            .and_then(|map| map.get(filename).cloned())
    }

    /// Number of files persisted so far.
    pub fn count(&self) -> usize {
        self.saved.read().map(|map| map.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Persist for MemorySink {
    async fn persist(&self, filename: &str, content: &str) -> io::Result<()> {
        let mut saved = self
            .saved
            .write()
            .map_err(|_| io::Error::other("lock poisoned"))?;
        saved.insert(filename.to_string(), content.to_string());
        Ok(())
    }
}
