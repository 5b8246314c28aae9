//! In-memory key-value store
//!
//! Holds values in a map for the lifetime of the process. Used by tests and
//! by callers that do not need anything to survive a restart. Write counts
//! are tracked per key so callers can check how often a key was persisted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::error::{FinanceError, FinanceResult};

use super::KeyValueStore;

/// A `KeyValueStore` backed by a `HashMap`
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
    writes: RwLock<HashMap<String, usize>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw values
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let data = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            data: RwLock::new(data),
            ..Self::default()
        }
    }

    /// Make every subsequent `get` and `set` fail (or succeed again)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// The raw value under `key`, bypassing availability
    pub fn raw(&self, key: &str) -> Option<String> {
        self.data
            .read()
            .ok()
            .and_then(|data| data.get(key).cloned())
    }

    /// Number of successful writes to `key`
    pub fn write_count(&self, key: &str) -> usize {
        self.writes
            .read()
            .ok()
            .and_then(|writes| writes.get(key).copied())
            .unwrap_or(0)
    }

    fn check_available(&self, action: &str, key: &str) -> FinanceResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(FinanceError::StoreUnavailable(format!(
                "cannot {} '{}': store is offline",
                action, key
            )));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        self.check_available("read", key)?;

        let data = self.data.read().map_err(|e| {
            FinanceError::StoreUnavailable(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FinanceResult<()> {
        self.check_available("write", key)?;

        let mut data = self.data.write().map_err(|e| {
            FinanceError::StoreUnavailable(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut writes = self.writes.write().map_err(|e| {
            FinanceError::StoreUnavailable(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(key.to_string(), value.to_string());
        *writes.entry(key.to_string()).or_default() += 1;

        Ok(())
    }
}
