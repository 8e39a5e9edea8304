use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::Storage;

/// Load a JSON array collection; an absent key is the empty collection.
/// A present-but-corrupt payload is an error, callers decide whether to
/// substitute an empty collection.
pub fn load_collection<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Result<Vec<T>> {
    match storage.get_item(key)? {
        Some(payload) => serde_json::from_str(&payload)
            .with_context(|| format!("Corrupt collection under key '{}'", key)),
        None => Ok(Vec::new()),
    }
}

/// Replace a JSON array collection wholesale.
pub fn save_collection<T: Serialize>(storage: &dyn Storage, key: &str, items: &[T]) -> Result<()> {
    let payload = serde_json::to_string_pretty(items)
        .with_context(|| format!("Failed to serialize collection '{}'", key))?;
    storage.set_item(key, &payload)
}

/// Load a single JSON document (e.g. the login session); absent key is `None`.
pub fn load_value<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Result<Option<T>> {
    match storage.get_item(key)? {
        Some(payload) => serde_json::from_str(&payload)
            .map(Some)
            .with_context(|| format!("Corrupt value under key '{}'", key)),
        None => Ok(None),
    }
}

pub fn save_value<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize value '{}'", key))?;
    storage.set_item(key, &payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: u64,
        title: String,
    }

    #[test]
    fn test_absent_collection_is_empty() {
        let store = MemoryStorage::new();
        let items: Vec<Entry> = load_collection(&store, "notices").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_collection_roundtrip() {
        let store = MemoryStorage::new();
        let items = vec![
            Entry {
                id: 1,
                title: "first".to_string(),
            },
            Entry {
                id: 2,
                title: "second".to_string(),
            },
        ];

        save_collection(&store, "notices", &items).unwrap();
        let loaded: Vec<Entry> = load_collection(&store, "notices").unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_corrupt_collection_is_an_error() {
        let store = MemoryStorage::new();
        store.set_item("notices", "not json at all").unwrap();
        let result: Result<Vec<Entry>> = load_collection(&store, "notices");
        assert!(result.is_err());
    }

    #[test]
    fn test_value_roundtrip() {
        let store = MemoryStorage::new();
        assert!(
            load_value::<Entry>(&store, "session").unwrap().is_none()
        );

        let value = Entry {
            id: 9,
            title: "session".to_string(),
        };
        save_value(&store, "session", &value).unwrap();
        assert_eq!(load_value::<Entry>(&store, "session").unwrap(), Some(value));
    }
}
