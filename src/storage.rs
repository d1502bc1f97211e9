use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::errors::ErrorWrapper;

/*
    String key-value storage for persisted application state. Views
    depend on this trait rather than a concrete backing so tests can
    substitute an in-memory store.
 */
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: String) -> Result<(), ErrorWrapper>;
}

/*
    A store backed by a single JSON object file of string keys to
    string values. Writes go straight through to disk.
 */
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>
}

impl FileStore {
    fn write_to_disk(&self) -> Result<(), ErrorWrapper> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(self.path.clone(), json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), ErrorWrapper> {
        self.entries.insert(key.to_string(), value);
        self.write_to_disk()
    }
}

pub fn build_file_store(path: PathBuf) -> Result<FileStore, ErrorWrapper> {
    let entries = if path.exists() {
        let json = fs::read_to_string(path.clone())?;
        serde_json::from_str(json.as_str())?
    } else {
        log::info!("No storage file at {:?}, starting empty", path);
        HashMap::new()
    };
    Ok(FileStore { path, entries })
}

pub fn default_store_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(std::env::temp_dir);
    base.join("asedit").join("storage.json")
}
