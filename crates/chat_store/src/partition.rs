//! The three fixed partitions of the local database.
//!
//! Partition names are closed: chat metadata, message bodies, and sync
//! bookkeeping each get an isolated key namespace. There is no dynamic
//! partition creation.

use std::fmt;

use redb::TableDefinition;

const CHATS: TableDefinition<&str, &[u8]> = TableDefinition::new("chats");
const MESSAGES: TableDefinition<&str, &[u8]> = TableDefinition::new("messages");
const SYNC: TableDefinition<&str, &[u8]> = TableDefinition::new("sync");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Chats,
    Messages,
    Sync,
}

impl Partition {
    /// Canonical order: chats, then messages, then sync.
    /// `Store::clear_all` iterates in this order.
    pub const ALL: [Partition; 3] = [Partition::Chats, Partition::Messages, Partition::Sync];

    pub fn name(self) -> &'static str {
        match self {
            Partition::Chats => "chats",
            Partition::Messages => "messages",
            Partition::Sync => "sync",
        }
    }

    pub(crate) fn table(self) -> TableDefinition<'static, &'static str, &'static [u8]> {
        match self {
            Partition::Chats => CHATS,
            Partition::Messages => MESSAGES,
            Partition::Sync => SYNC,
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
