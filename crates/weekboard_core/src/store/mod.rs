//! Durable key-value storage boundary.
//!
//! # Responsibility
//! - Open and bootstrap the backing key-value store.
//! - Provide the typed read-with-fallback / swallow-on-failure adapter the
//!   services persist through.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Nothing above this layer sees a storage error: reads degrade to a
//!   fallback value, writes are logged and swallowed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod adapter;
pub mod kv;

pub use adapter::DurableStore;
pub use kv::{open_kv, open_kv_in_memory, KvBackend, MemoryKv, SqliteKv};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage bootstrap and transport errors.
///
/// Only surfaced by [`open_kv`]/[`open_kv_in_memory`] and the raw
/// [`KvBackend`] calls; the [`DurableStore`] adapter absorbs them.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        store_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                store_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {store_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
