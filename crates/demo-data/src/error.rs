//! Error types for the demo-data crate.

use thiserror::Error;

/// Errors raised while parsing or validating a demonstration catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// The catalogue JSON is malformed or missing required fields.
    #[error("invalid catalogue JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The catalogue version is not supported.
    #[error("unsupported catalogue version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the catalogue.
        actual: u32,
    },

    /// Two postings share the same identifier.
    #[error("duplicate posting id '{id}'")]
    DuplicatePostingId {
        /// The repeated identifier.
        id: String,
    },

    /// A posting lists no requirements.
    #[error("posting '{id}' has no requirements")]
    EmptyRequirements {
        /// Identifier of the offending posting.
        id: String,
    },

    /// Two accounts share an email within the same role.
    #[error("duplicate {role} account for '{email}'")]
    DuplicateAccount {
        /// The repeated email address.
        email: String,
        /// Role scope in which the duplicate was found.
        role: String,
    },
}
