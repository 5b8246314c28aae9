//! Storage layer for the finance tracker
//!
//! Persistence goes through a string-keyed store holding JSON text. The
//! finance store only ever calls `get` and `set`; durability is up to the
//! implementation.

pub mod file_io;
pub mod file_store;
pub mod memory;
pub mod sample;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{FinanceError, FinanceResult};

/// Key holding the JSON array of transactions
pub const TRANSACTIONS_KEY: &str = "finance-transactions";

/// Key holding the JSON array of budgets
pub const BUDGETS_KEY: &str = "finance-budgets";

/// Key holding the JSON boolean dark-mode preference
pub const DARK_MODE_KEY: &str = "finance-darkmode";

/// A persistent string-keyed store
///
/// Implementations report any failure to reach the backing medium as
/// [`FinanceError::StoreUnavailable`].
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if nothing was ever written
    fn get(&self, key: &str) -> FinanceResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> FinanceResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> FinanceResult<()> {
        (**self).set(key, value)
    }
}

/// Read and parse the JSON value under `key`
///
/// A value that does not parse as `T` is reported as
/// [`FinanceError::PersistedDataCorrupt`].
pub fn load_json<T, S>(store: &S, key: &str) -> FinanceResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| FinanceError::corrupt(key, e)),
        None => Ok(None),
    }
}

/// Serialize `value` as JSON and write it under `key`
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> FinanceResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)?;
    tracing::debug!(key, bytes = raw.len(), "persisted value");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_load_absent_key() {
        let store = MemoryStore::new();
        let value: Option<Vec<u32>> = load_json(&store, "missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        save_json(&store, DARK_MODE_KEY, &true).unwrap();

        assert_eq!(store.raw(DARK_MODE_KEY).as_deref(), Some("true"));
        let loaded: Option<bool> = load_json(&store, DARK_MODE_KEY).unwrap();
        assert_eq!(loaded, Some(true));
    }

    #[test]
    fn test_load_corrupt_value() {
        let store = MemoryStore::new();
        store.set(BUDGETS_KEY, "{not json").unwrap();

        let err = load_json::<Vec<u32>, _>(&store, BUDGETS_KEY).unwrap_err();
        assert!(err.is_corrupt_data());
    }

    #[test]
    fn test_load_out_of_range_amount_is_corrupt() {
        let store = MemoryStore::new();
        store.set(BUDGETS_KEY, "[12.5, 1e17]").unwrap();

        let err = load_json::<Vec<Money>, _>(&store, BUDGETS_KEY).unwrap_err();
        assert!(err.is_corrupt_data());
    }

    #[test]
    fn test_load_wrong_shape() {
        let store = MemoryStore::new();
        store.set(TRANSACTIONS_KEY, r#"{"transactions": []}"#).unwrap();

        let err = load_json::<Vec<u32>, _>(&store, TRANSACTIONS_KEY).unwrap_err();
        assert!(matches!(
            err,
            FinanceError::PersistedDataCorrupt { ref key, .. } if key == TRANSACTIONS_KEY
        ));
    }
}
