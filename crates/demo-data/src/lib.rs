//! Bundled demonstration data for the job board.
//!
//! This crate owns the literal postings seeded into an empty board and the
//! closed set of demonstration accounts accepted at login. It is independent
//! of backend domain types; the backend converts these records at the point
//! of use.
//!
//! # Example
//!
//! ```
//! use demo_data::{AccountRole, DemoCatalogue};
//!
//! let catalogue = DemoCatalogue::bundled().expect("bundled catalogue is valid");
//! assert_eq!(catalogue.postings().len(), 3);
//!
//! let employer = catalogue
//!     .accounts()
//!     .iter()
//!     .find(|account| account.role == AccountRole::Employer)
//!     .expect("demo employer exists");
//! assert_eq!(employer.id, "emp1");
//! ```

mod catalogue;
mod error;
mod records;
mod validation;

pub use catalogue::DemoCatalogue;
pub use error::CatalogueError;
pub use records::{AccountRole, DemoAccount, DemoPosting};
