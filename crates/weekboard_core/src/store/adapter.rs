//! Typed durable-store adapter.
//!
//! # Responsibility
//! - Serialize named values to JSON and hand them to a [`KvBackend`].
//! - Absorb every storage failure: reads fall back, writes are swallowed.
//!
//! # Invariants
//! - `read` never returns an error; absent, unreadable and malformed all
//!   degrade to the caller's fallback.
//! - `write` never propagates; callers keep their in-memory state even when
//!   persistence fails.

use super::kv::KvBackend;
use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON get/set of named values over an arbitrary backend.
pub struct DurableStore<B: KvBackend> {
    backend: B,
}

impl<B: KvBackend> DurableStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Reads and deserializes the value under `key`.
    ///
    /// Returns `fallback` when the key is absent, the backend fails, or the
    /// stored payload does not deserialize. Failures are logged; malformed
    /// data is treated as absent, not as an error.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(err) => {
                warn!(
                    "event=store_read module=store status=fallback key={key} error_code=backend_read_failed error={err}"
                );
                return fallback;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=store_read module=store status=fallback key={key} error_code=malformed_payload error={err}"
                );
                fallback
            }
        }
    }

    /// Serializes `value` and persists it under `key`.
    ///
    /// A serialization or backend failure is logged and swallowed.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    "event=store_write module=store status=error key={key} error_code=serialize_failed error={err}"
                );
                return;
            }
        };

        if let Err(err) = self.backend.set(key, &raw) {
            error!(
                "event=store_write module=store status=error key={key} error_code=backend_write_failed error={err}"
            );
        }
    }
}
