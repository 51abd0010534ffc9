use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database open failed: {0}")]
    Open(#[from] redb::DatabaseError),

    #[error("Storage transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Storage table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Storage commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Record written to '{partition}' has no usable id field")]
    MissingId { partition: &'static str },
}
