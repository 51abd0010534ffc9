//! Typed store handle — the API the rest of the app talks to.

use std::{path::Path, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    backend::{DetachedBackend, StoreBackend},
    error::StoreError,
    kv::RedbBackend,
    partition::Partition,
};

/// Handle over the three chat partitions. Cheap to clone (Arc internally);
/// construct once at application start and pass it to whatever needs
/// persistence.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StoreBackend>,
}

impl Store {
    /// Open (or create) the live store at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            backend: Arc::new(RedbBackend::open(path)?),
        })
    }

    /// A store with no persistence at all: reads are empty, writes are
    /// dropped. For contexts where the backing storage is unavailable
    /// (server-side rendering, build steps, headless tests).
    pub fn detached() -> Self {
        Self {
            backend: Arc::new(DetachedBackend::new()),
        }
    }

    /// Wrap a custom backend. Mainly useful for tests.
    pub fn with_backend(backend: Arc<dyn StoreBackend>) -> Self {
        Self { backend }
    }

    /// Read the record stored under `key`, or `None` if absent.
    pub async fn read<T: DeserializeOwned>(
        &self,
        partition: Partition,
        key: &str,
    ) -> Result<Option<T>, StoreError> {
        let bytes = self.backend.get(partition, key.to_owned()).await?;
        match bytes {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Read every record in the partition. Order is unspecified.
    pub async fn read_all<T: DeserializeOwned>(
        &self,
        partition: Partition,
    ) -> Result<Vec<T>, StoreError> {
        let raw = self.backend.get_all(partition).await?;
        raw.iter()
            .map(|bytes| serde_json::from_slice(bytes).map_err(StoreError::from))
            .collect()
    }

    /// Persist a single record under its `id` field, overwriting any
    /// existing record with the same id.
    pub async fn write<T: Serialize>(
        &self,
        partition: Partition,
        record: &T,
    ) -> Result<(), StoreError> {
        let value = serde_json::to_value(record)?;
        let entry = entry_for(partition, &value)?;
        self.backend.set_many(partition, vec![entry]).await
    }

    /// Persist a batch of records in one transaction, each under its own
    /// `id` field.
    pub async fn write_many<T: Serialize>(
        &self,
        partition: Partition,
        records: &[T],
    ) -> Result<(), StoreError> {
        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            let value = serde_json::to_value(record)?;
            entries.push(entry_for(partition, &value)?);
        }
        self.backend.set_many(partition, entries).await
    }

    /// Remove the record stored under `key`. Absent keys are not an error.
    pub async fn delete(&self, partition: Partition, key: &str) -> Result<(), StoreError> {
        self.backend.remove(partition, key.to_owned()).await
    }

    /// Remove every record in the partition.
    pub async fn delete_all(&self, partition: Partition) -> Result<(), StoreError> {
        self.backend.remove_all(partition).await
    }

    /// Wipe all three partitions, in the fixed order chats, messages, sync.
    /// A failure part-way through leaves earlier partitions cleared.
    pub async fn clear_all(&self) -> Result<(), StoreError> {
        for partition in Partition::ALL {
            self.backend.remove_all(partition).await?;
        }
        Ok(())
    }
}

/// Storage key for a record: its `id` field, stringified. Records are
/// caller-shaped JSON, so the id is pulled from the serialised form.
fn entry_for(partition: Partition, value: &Value) -> Result<(String, Vec<u8>), StoreError> {
    let key = match value.get("id") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            return Err(StoreError::MissingId {
                partition: partition.name(),
            })
        }
    };
    Ok((key, serde_json::to_vec(value)?))
}
