use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use entity::backend::{FileUpload, ObjectStorage, StoreError};

use crate::constant::{TEST_IMAGE_BUCKET, TEST_SUPABASE_URL};

#[derive(Default)]
struct StorageState {
    objects: HashMap<String, FileUpload>,
    failure: Option<StoreError>,
}

/// In-memory object storage for the test image bucket.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<StorageState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StorageState> {
        self.state.lock().expect("memory storage lock poisoned")
    }

    /// Stored object at `path`, if any.
    pub fn object(&self, path: &str) -> Option<FileUpload> {
        self.lock().objects.get(path).cloned()
    }

    /// Paths of every stored object.
    pub fn paths(&self) -> Vec<String> {
        self.lock().objects.keys().cloned().collect()
    }

    /// Makes every following upload fail with `error`.
    pub fn fail_with(&self, error: StoreError) {
        self.lock().failure = Some(error);
    }
}

impl ObjectStorage for MemoryStorage {
    async fn upload(&self, path: &str, file: &FileUpload) -> Result<String, StoreError> {
        let mut state = self.lock();

        if let Some(error) = &state.failure {
            return Err(error.clone());
        }

        if state.objects.contains_key(path) {
            return Err(StoreError::Service {
                status: 409,
                message: "The resource already exists".to_string(),
            });
        }

        state.objects.insert(path.to_string(), file.clone());
        Ok(path.to_string())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{TEST_SUPABASE_URL}/storage/v1/object/public/{TEST_IMAGE_BUCKET}/{path}")
    }
}
