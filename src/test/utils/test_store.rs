use std::collections::HashMap;

use crate::error::errors::ErrorWrapper;
use crate::storage::KeyValueStore;

// An in-memory stand-in for the file-backed store
pub struct InMemoryStore {
    entries: HashMap<String, String>
}

impl InMemoryStore {
    pub fn new() -> InMemoryStore {
        InMemoryStore { entries: HashMap::new() }
    }

    pub fn with_entry(key: &str, value: &str) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), ErrorWrapper> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
