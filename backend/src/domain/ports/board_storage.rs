//! Port for the job board's persisted records.
//!
//! Three independent records are kept: the current user, the postings
//! collection and the applications collection. Each is loaded and saved
//! whole; there is no partial update. A missing record loads as `None`, which
//! callers distinguish from an empty collection (postings are seeded only when
//! the record is missing).

use crate::domain::{Application, JobPosting, User};

use super::define_port_error;

define_port_error! {
    /// Errors raised by board storage adapters.
    pub enum BoardStorageError {
        /// The backing store could not be read or written.
        Io => "board storage i/o failed",
        /// A stored record could not be encoded or decoded.
        Serialization => "board storage record is malformed",
    }
}

/// Port for loading and saving the board's named records.
///
/// Implementations overwrite records wholesale and provide no concurrency
/// control; the board assumes a single writer.
#[cfg_attr(test, mockall::automock)]
pub trait BoardStorage: Send + Sync {
    /// Load the signed-in user, if one was persisted.
    fn load_current_user(&self) -> Result<Option<User>, BoardStorageError>;

    /// Persist the signed-in user.
    fn save_current_user(&self, user: &User) -> Result<(), BoardStorageError>;

    /// Remove the persisted user record.
    fn clear_current_user(&self) -> Result<(), BoardStorageError>;

    /// Load the postings collection, or `None` when it was never written or
    /// has been cleared.
    fn load_jobs(&self) -> Result<Option<Vec<JobPosting>>, BoardStorageError>;

    /// Overwrite the postings collection.
    fn save_jobs(&self, jobs: &[JobPosting]) -> Result<(), BoardStorageError>;

    /// Remove the postings record entirely.
    fn clear_jobs(&self) -> Result<(), BoardStorageError>;

    /// Load the applications collection, or `None` when it was never written.
    fn load_applications(&self) -> Result<Option<Vec<Application>>, BoardStorageError>;

    /// Overwrite the applications collection.
    fn save_applications(&self, applications: &[Application]) -> Result<(), BoardStorageError>;
}
