//! In-memory storage for tests and ephemeral sessions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{StorageAdapter, StorageResult};

/// Keeps payloads in a map shared across clones.
///
/// The shared `Rc<RefCell<..>>` makes a clone behave like a second handle to
/// the same device, matching `JsonFileStorage`. `Rc` (not `Arc`) is
/// deliberate: the store model is single-threaded.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw payload under `key`, mainly for test assertions.
    pub fn payload(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Seeds a raw payload, bypassing the typed save path.
    pub fn seed(&self, key: impl Into<String>, payload: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), payload.into());
    }
}

impl StorageAdapter for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
