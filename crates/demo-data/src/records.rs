//! Demonstration record types.
//!
//! These mirror the backend's user and posting shapes without depending on
//! them.

use std::fmt;

use serde::Deserialize;

/// Role scope a demonstration account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Account that posts jobs.
    Employer,
    /// Account that applies to jobs.
    Jobseeker,
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Employer => f.write_str("employer"),
            Self::Jobseeker => f.write_str("jobseeker"),
        }
    }
}

/// A demonstration account accepted by the login flow.
///
/// The password is kept in plaintext; the set is a closed fixture, not a
/// credential store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoAccount {
    /// Stable user identifier assigned on login.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, compared case-sensitively.
    pub email: String,
    /// Login password, compared case-sensitively.
    pub password: String,
    /// Role scope the account is listed under.
    pub role: AccountRole,
    /// Company name for employer accounts.
    #[serde(default)]
    pub company: Option<String>,
    /// Resume flag for job seeker accounts.
    #[serde(default)]
    pub has_resume: Option<bool>,
}

/// A posting seeded into an empty board.
///
/// Creation timestamps are stamped by the backend at seeding time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoPosting {
    /// Posting identifier.
    pub id: String,
    /// Job title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Free-form location.
    pub location: String,
    /// Free-text description.
    pub description: String,
    /// Ordered requirement lines.
    pub requirements: Vec<String>,
    /// Owning employer identifier.
    pub employer_id: String,
    /// Optional salary range.
    #[serde(default)]
    pub salary: Option<String>,
    /// Optional employment type.
    #[serde(default, rename = "type")]
    pub job_type: Option<String>,
}
