//! Process-local board storage.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ports::{BoardStorage, BoardStorageError};
use crate::domain::{Application, JobPosting, User};

use super::{RecordKey, decode, encode};

/// Board storage holding each record's JSON text in memory.
///
/// Records are serialized on save and parsed on load, so the adapter
/// exercises the same encoding as durable storage.
///
/// # Examples
/// ```
/// use jobboard::domain::ports::BoardStorage;
/// use jobboard::outbound::storage::InMemoryBoardStorage;
///
/// let storage = InMemoryBoardStorage::new();
/// assert!(storage.load_jobs().expect("load").is_none());
/// storage.save_jobs(&[]).expect("save");
/// assert_eq!(storage.load_jobs().expect("load"), Some(Vec::new()));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBoardStorage {
    records: Mutex<HashMap<RecordKey, String>>,
}

impl InMemoryBoardStorage {
    /// Create storage with no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON text held for `key`.
    pub fn raw(&self, key: RecordKey) -> Option<String> {
        self.lock().get(&key).cloned()
    }

    /// Overwrite `key` with arbitrary text, bypassing encoding.
    pub fn insert_raw(&self, key: RecordKey, text: impl Into<String>) {
        self.lock().insert(key, text.into());
    }

    fn load<T: serde::de::DeserializeOwned>(
        &self,
        key: RecordKey,
    ) -> Result<Option<T>, BoardStorageError> {
        decode(key, self.raw(key))
    }

    fn save<T: serde::Serialize + ?Sized>(
        &self,
        key: RecordKey,
        value: &T,
    ) -> Result<(), BoardStorageError> {
        let text = encode(key, value)?;
        self.lock().insert(key, text);
        Ok(())
    }

    fn remove(&self, key: RecordKey) {
        self.lock().remove(&key);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<RecordKey, String>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BoardStorage for InMemoryBoardStorage {
    fn load_current_user(&self) -> Result<Option<User>, BoardStorageError> {
        self.load(RecordKey::CurrentUser)
    }

    fn save_current_user(&self, user: &User) -> Result<(), BoardStorageError> {
        self.save(RecordKey::CurrentUser, user)
    }

    fn clear_current_user(&self) -> Result<(), BoardStorageError> {
        self.remove(RecordKey::CurrentUser);
        Ok(())
    }

    fn load_jobs(&self) -> Result<Option<Vec<JobPosting>>, BoardStorageError> {
        self.load(RecordKey::Jobs)
    }

    fn save_jobs(&self, jobs: &[JobPosting]) -> Result<(), BoardStorageError> {
        self.save(RecordKey::Jobs, jobs)
    }

    fn clear_jobs(&self) -> Result<(), BoardStorageError> {
        self.remove(RecordKey::Jobs);
        Ok(())
    }

    fn load_applications(&self) -> Result<Option<Vec<Application>>, BoardStorageError> {
        self.load(RecordKey::Applications)
    }

    fn save_applications(&self, applications: &[Application]) -> Result<(), BoardStorageError> {
        self.save(RecordKey::Applications, applications)
    }
}
