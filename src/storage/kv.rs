use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Key/value contract backing the client state stores. Mirrors the
/// localStorage surface the stores were written against: reads of missing
/// or unreadable keys yield `None`, writes are synchronous, and write
/// failures are swallowed after logging so a full disk never takes down a
/// request.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// One JSON file per key under a data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(err) = fs::create_dir_all(&dir) {
            eprintln!("Failed to create data directory {:?}: {}", dir, err);
        }
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are logical namespaces like "travel-favorites"; keep only
        // filename-safe characters.
        let safe: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: String) {
        let path = self.path_for(key);
        if let Err(err) = fs::write(&path, value) {
            eprintln!("Failed to persist {:?}: {}", path, err);
        }
    }

    fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if path.exists() {
            if let Err(err) = fs::remove_file(&path) {
                eprintln!("Failed to remove {:?}: {}", path, err);
            }
        }
    }
}
