//! Durable board storage: one JSON document per record.
//!
//! Records live as `<record>.json` inside a single directory opened through
//! `cap_std`, so the adapter cannot reach outside it. Writes go to a hidden
//! temporary file that is synced and renamed over the target, leaving the
//! previous document intact if the process dies mid-write.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;

use crate::domain::ports::{BoardStorage, BoardStorageError};
use crate::domain::{Application, JobPosting, User};

use super::{RecordKey, decode, encode};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Board storage backed by a directory of JSON documents.
#[derive(Debug)]
pub struct FileBoardStorage {
    dir: Dir,
    root: Utf8PathBuf,
}

impl FileBoardStorage {
    /// Open `root`, creating it and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStorageError::Io`] when the directory cannot be
    /// created or opened.
    ///
    /// # Examples
    /// ```
    /// use camino::Utf8PathBuf;
    /// use jobboard::domain::ports::BoardStorage;
    /// use jobboard::outbound::storage::FileBoardStorage;
    ///
    /// let tmp = tempfile::tempdir().expect("tempdir");
    /// let root = Utf8PathBuf::from_path_buf(tmp.path().join("board")).expect("utf8 path");
    /// let storage = FileBoardStorage::open(&root).expect("open storage");
    /// assert!(storage.load_current_user().expect("load").is_none());
    /// ```
    pub fn open(root: &Utf8Path) -> Result<Self, BoardStorageError> {
        Dir::create_ambient_dir_all(root, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(root, ambient_authority()))
            .map(|dir| Self {
                dir,
                root: root.to_path_buf(),
            })
            .map_err(|err| BoardStorageError::io(format!("{root}: {err}")))
    }

    /// Directory holding the record documents.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn file_name(key: RecordKey) -> String {
        format!("{key}.json")
    }

    fn read(&self, key: RecordKey) -> Result<Option<String>, BoardStorageError> {
        match self.dir.read_to_string(Self::file_name(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(key, &err)),
        }
    }

    fn load<T: serde::de::DeserializeOwned>(
        &self,
        key: RecordKey,
    ) -> Result<Option<T>, BoardStorageError> {
        decode(key, self.read(key)?)
    }

    fn save<T: serde::Serialize + ?Sized>(
        &self,
        key: RecordKey,
        value: &T,
    ) -> Result<(), BoardStorageError> {
        let text = encode(key, value)?;
        self.write_atomic(key, &text)?;
        debug!(record = %key, bytes = text.len(), "record written");
        Ok(())
    }

    fn remove(&self, key: RecordKey) -> Result<(), BoardStorageError> {
        match self.dir.remove_file(Self::file_name(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(key, &err)),
        }
    }

    fn write_atomic(&self, key: RecordKey, contents: &str) -> Result<(), BoardStorageError> {
        let target = Self::file_name(key);
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp_name = format!(".{target}.tmp.{}.{counter}", std::process::id());

        self.write_temp_file(&tmp_name, contents)
            .and_then(|()| self.dir.rename(&tmp_name, &self.dir, &target))
            .map_err(|err| {
                // The temp file may not exist if creating it failed.
                drop(self.dir.remove_file(&tmp_name));
                self.io_error(key, &err)
            })?;
        self.sync_directory();
        Ok(())
    }

    fn write_temp_file(&self, tmp_name: &str, contents: &str) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let mut file = self.dir.open_with(tmp_name, &options)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    }

    fn sync_directory(&self) {
        if let Err(err) = self.dir.open(".").and_then(|dir| dir.sync_all()) {
            debug!(root = %self.root, error = %err, "directory sync skipped");
        }
    }

    fn io_error(&self, key: RecordKey, err: &io::Error) -> BoardStorageError {
        BoardStorageError::io(format!("{}/{}: {err}", self.root, Self::file_name(key)))
    }
}

impl BoardStorage for FileBoardStorage {
    fn load_current_user(&self) -> Result<Option<User>, BoardStorageError> {
        self.load(RecordKey::CurrentUser)
    }

    fn save_current_user(&self, user: &User) -> Result<(), BoardStorageError> {
        self.save(RecordKey::CurrentUser, user)
    }

    fn clear_current_user(&self) -> Result<(), BoardStorageError> {
        self.remove(RecordKey::CurrentUser)
    }

    fn load_jobs(&self) -> Result<Option<Vec<JobPosting>>, BoardStorageError> {
        self.load(RecordKey::Jobs)
    }

    fn save_jobs(&self, jobs: &[JobPosting]) -> Result<(), BoardStorageError> {
        self.save(RecordKey::Jobs, jobs)
    }

    fn clear_jobs(&self) -> Result<(), BoardStorageError> {
        self.remove(RecordKey::Jobs)
    }

    fn load_applications(&self) -> Result<Option<Vec<Application>>, BoardStorageError> {
        self.load(RecordKey::Applications)
    }

    fn save_applications(&self, applications: &[Application]) -> Result<(), BoardStorageError> {
        self.save(RecordKey::Applications, applications)
    }
}
