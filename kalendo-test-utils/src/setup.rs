use crate::memory::{MemoryAuth, MemoryBackend, MemoryStorage, MemoryStore};

/// A seeded in-memory backend ready for a test.
pub struct TestSetup {
    pub backend: MemoryBackend,
}

impl TestSetup {
    /// An empty backend with no rows and no session.
    pub fn new() -> Self {
        Self {
            backend: MemoryBackend::new(),
        }
    }

    pub fn store(&self) -> &MemoryStore {
        &self.backend.store
    }

    pub fn auth(&self) -> &MemoryAuth {
        &self.backend.auth
    }

    pub fn storage(&self) -> &MemoryStorage {
        &self.backend.storage
    }
}

impl Default for TestSetup {
    fn default() -> Self {
        Self::new()
    }
}
