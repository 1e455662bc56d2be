//! Record-oriented storage adapters for the job board.
//!
//! Both adapters keep each record as a JSON document addressed by a
//! [`RecordKey`]; they differ only in where the text lives.

mod file;
mod memory;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::ports::BoardStorageError;

pub use file::FileBoardStorage;
pub use memory::InMemoryBoardStorage;

/// Names of the persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    /// The signed-in user.
    CurrentUser,
    /// The postings collection.
    Jobs,
    /// The applications collection.
    Applications,
}

impl RecordKey {
    /// Stable storage name of the record.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CurrentUser => "user",
            Self::Jobs => "jobs",
            Self::Applications => "applications",
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn encode<T>(key: RecordKey, value: &T) -> Result<String, BoardStorageError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value)
        .map_err(|err| BoardStorageError::serialization(format!("{key}: {err}")))
}

pub(crate) fn decode<T>(key: RecordKey, raw: Option<String>) -> Result<Option<T>, BoardStorageError>
where
    T: DeserializeOwned,
{
    raw.map(|text| {
        serde_json::from_str(&text)
            .map_err(|err| BoardStorageError::serialization(format!("{key}: {err}")))
    })
    .transpose()
}
