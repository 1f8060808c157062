use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{KeyValueStore, KvError};

/// In-process key-value store. Counts writes so callers can assert on them.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    slots: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one slot (not counted as a write).
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.slots_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Number of `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current raw value of a slot.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots_mut().get(key).cloned()
    }

    fn slots_mut(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave the map half-written.
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.slots_mut().insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
