//! Demonstration catalogue parsing and lookups.
//!
//! The catalogue is bundled as JSON so the demonstration set can be edited
//! without touching code. Parsing validates the structure once; lookups are
//! plain scans over a handful of records.

use serde::Deserialize;

use crate::error::CatalogueError;
use crate::records::{DemoAccount, DemoPosting};
use crate::validation::{validate_accounts, validate_postings};

/// Current supported catalogue version.
const SUPPORTED_VERSION: u32 = 1;

const BUNDLED_JSON: &str = include_str!("../fixtures/demo-catalogue.json");

/// Demonstration accounts and seed postings.
///
/// # Example
///
/// ```
/// use demo_data::DemoCatalogue;
///
/// let json = r#"{
///     "version": 1,
///     "accounts": [],
///     "postings": [{
///         "id": "1",
///         "title": "Rust Engineer",
///         "company": "Ferris Ltd",
///         "location": "Remote",
///         "description": "Systems work.",
///         "requirements": ["Rust"],
///         "employerId": "emp1"
///     }]
/// }"#;
///
/// let catalogue = DemoCatalogue::from_json(json).expect("valid catalogue");
/// assert_eq!(catalogue.postings()[0].title, "Rust Engineer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoCatalogue {
    accounts: Vec<DemoAccount>,
    postings: Vec<DemoPosting>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalogue {
    version: u32,
    #[serde(default)]
    accounts: Vec<DemoAccount>,
    #[serde(default)]
    postings: Vec<DemoPosting>,
}

impl DemoCatalogue {
    /// Parses the catalogue compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if the bundled fixture is invalid.
    pub fn bundled() -> Result<Self, CatalogueError> {
        Self::from_json(BUNDLED_JSON)
    }

    /// Parses a catalogue from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if:
    /// - The JSON is malformed or a required field is missing
    /// - The version is unsupported
    /// - Posting identifiers repeat, or a posting has no requirements
    /// - An email appears twice within one role
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let raw: RawCatalogue =
            serde_json::from_str(json).map_err(|e| CatalogueError::ParseError {
                message: e.to_string(),
            })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(CatalogueError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        validate_postings(&raw.postings)?;
        validate_accounts(&raw.accounts)?;

        Ok(Self {
            accounts: raw.accounts,
            postings: raw.postings,
        })
    }

    /// Returns the demonstration accounts.
    #[must_use]
    pub fn accounts(&self) -> &[DemoAccount] {
        &self.accounts
    }

    /// Returns the seed postings in catalogue order.
    #[must_use]
    pub fn postings(&self) -> &[DemoPosting] {
        &self.postings
    }
}
