//! chat_store — Local chat persistence for Webchat
//!
//! Thin typed layer over a partitioned key-value database. Three fixed
//! partitions (`chats`, `messages`, `sync`) hold caller-shaped JSON records
//! keyed by their `id` field. No indexing, caching, or eviction of its own;
//! transactionality is delegated to the redb engine underneath.
//!
//! # Environment handling
//! Contexts without persistent storage (server-side rendering, build steps)
//! get a detached store: same API, empty reads, dropped writes. The
//! capability check happens once at construction, see [`Store::detached`].

pub mod backend;
pub mod error;
pub mod kv;
pub mod partition;
pub mod store;

pub use backend::StoreBackend;
pub use error::StoreError;
pub use partition::Partition;
pub use store::Store;
