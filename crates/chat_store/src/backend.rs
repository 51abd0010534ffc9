//! Backend seam between the typed `Store` API and the storage engine.
//!
//! The environment capability check happens once, at construction: a process
//! with a writable data directory gets the live redb engine, anything else
//! (headless tooling, tests that opt out of persistence) gets
//! `DetachedBackend`. Callers never branch on the environment again.

use async_trait::async_trait;
use tracing::warn;

use crate::{error::StoreError, partition::Partition};

/// Raw key-value operations a storage engine must provide.
///
/// Values are serialised JSON; the typed layer in `Store` owns the
/// (de)serialisation so implementations stay object-safe.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// Single-key lookup. `None` when the key is absent.
    async fn get(&self, partition: Partition, key: String) -> Result<Option<Vec<u8>>, StoreError>;

    /// Every value in the partition, order unspecified.
    async fn get_all(&self, partition: Partition) -> Result<Vec<Vec<u8>>, StoreError>;

    /// Insert all entries in one transaction, overwriting existing keys.
    async fn set_many(
        &self,
        partition: Partition,
        entries: Vec<(String, Vec<u8>)>,
    ) -> Result<(), StoreError>;

    /// Remove one key. Removing an absent key is not an error.
    async fn remove(&self, partition: Partition, key: String) -> Result<(), StoreError>;

    /// Remove every key in the partition.
    async fn remove_all(&self, partition: Partition) -> Result<(), StoreError>;
}

/// Null-object backend for contexts without persistent storage.
///
/// Reads come back empty, writes and deletes succeed without doing anything.
/// Matches the client-side convention that a server-rendered or build-time
/// pass must not fail just because the browser store is unavailable.
pub struct DetachedBackend;

impl DetachedBackend {
    pub fn new() -> Self {
        warn!("local store is detached; reads return empty and writes are dropped");
        Self
    }
}

impl Default for DetachedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreBackend for DetachedBackend {
    async fn get(&self, _: Partition, _: String) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(None)
    }

    async fn get_all(&self, _: Partition) -> Result<Vec<Vec<u8>>, StoreError> {
        Ok(Vec::new())
    }

    async fn set_many(
        &self,
        _: Partition,
        _: Vec<(String, Vec<u8>)>,
    ) -> Result<(), StoreError> {
        Ok(())
    }

    async fn remove(&self, _: Partition, _: String) -> Result<(), StoreError> {
        Ok(())
    }

    async fn remove_all(&self, _: Partition) -> Result<(), StoreError> {
        Ok(())
    }
}
