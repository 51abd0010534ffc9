//! Live storage engine backed by redb.
//!
//! One database file, one redb table per partition. redb gives us atomic
//! multi-key writes within a transaction; nothing here adds indexing,
//! caching, or eviction on top. redb is synchronous, so every operation is
//! pushed onto the blocking thread pool to keep the async callers unblocked.

use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use redb::{Database, ReadableTable};
use tracing::debug;

use crate::{backend::StoreBackend, error::StoreError, partition::Partition};

pub struct RedbBackend {
    db: Arc<Database>,
}

impl RedbBackend {
    /// Open (or create) the database at `path` and ensure all three
    /// partition tables exist. Idempotent; safe to call on every startup.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let db = Database::create(path)?;

        let txn = db.begin_write()?;
        for partition in Partition::ALL {
            txn.open_table(partition.table())?;
        }
        txn.commit()?;

        debug!(path = %path.display(), "opened local chat store");
        Ok(Self { db: Arc::new(db) })
    }
}

#[async_trait]
impl StoreBackend for RedbBackend {
    async fn get(&self, partition: Partition, key: String) -> Result<Option<Vec<u8>>, StoreError> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let txn = db.begin_read()?;
            let table = txn.open_table(partition.table())?;
            let value = table.get(key.as_str())?;
            Ok(value.map(|guard| guard.value().to_vec()))
        })
        .await?
    }

    async fn get_all(&self, partition: Partition) -> Result<Vec<Vec<u8>>, StoreError> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let txn = db.begin_read()?;
            let table = txn.open_table(partition.table())?;
            let mut values = Vec::new();
            for entry in table.iter()? {
                let (_, value) = entry?;
                values.push(value.value().to_vec());
            }
            Ok(values)
        })
        .await?
    }

    async fn set_many(
        &self,
        partition: Partition,
        entries: Vec<(String, Vec<u8>)>,
    ) -> Result<(), StoreError> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let txn = db.begin_write()?;
            {
                let mut table = txn.open_table(partition.table())?;
                for (key, value) in &entries {
                    table.insert(key.as_str(), value.as_slice())?;
                }
            }
            txn.commit()?;
            Ok(())
        })
        .await?
    }

    async fn remove(&self, partition: Partition, key: String) -> Result<(), StoreError> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let txn = db.begin_write()?;
            {
                let mut table = txn.open_table(partition.table())?;
                table.remove(key.as_str())?;
            }
            txn.commit()?;
            Ok(())
        })
        .await?
    }

    async fn remove_all(&self, partition: Partition) -> Result<(), StoreError> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let txn = db.begin_write()?;
            // Dropping and reopening the table clears it in one step while
            // keeping the partition present for later reads.
            txn.delete_table(partition.table())?;
            txn.open_table(partition.table())?;
            txn.commit()?;
            Ok(())
        })
        .await?
    }
}
