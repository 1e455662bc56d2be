//! User data model.
//!
//! A [`User`] is the session's notion of who is signed in. Identifier and role
//! are fixed when the user is created; [`ProfileUpdate`] can only reach the
//! editable profile fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::UserId;

/// Role a user acts under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Browses postings and applies to them.
    Jobseeker,
    /// Creates and manages postings.
    Employer,
}

impl UserRole {
    /// Stable lowercase name used in persisted records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jobseeker => "jobseeker",
            Self::Employer => "employer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application user.
///
/// ## Invariants
/// - `id` and `role` never change after construction.
/// - `company` is only meaningful for employers and `has_resume` for job
///   seekers; neither is enforced.
///
/// Serialised as camelCase JSON. `role` is written as `null` when the user
/// registered without one; absent optional fields are omitted.
///
/// # Examples
/// ```
/// use jobboard::domain::{User, UserId, UserRole};
///
/// let user = User::new(
///     UserId::new("emp1"),
///     "Tech Corp",
///     "employer@example.com",
///     Some(UserRole::Employer),
/// )
/// .with_company("Tech Corp");
/// assert_eq!(user.role(), Some(UserRole::Employer));
/// assert_eq!(user.company(), Some("Tech Corp"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    has_resume: Option<bool>,
}

impl User {
    /// Construct a user with no company and no resume flag.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Option<UserRole>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            company: None,
            has_resume: None,
        }
    }

    /// Build a user from registration input under a freshly minted id.
    pub fn from_registration(id: UserId, registration: UserRegistration) -> Self {
        let UserRegistration {
            name,
            email,
            role,
            company,
            has_resume,
        } = registration;
        Self {
            id,
            name,
            email,
            role,
            company,
            has_resume,
        }
    }

    /// Attach a company name.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Attach a resume-on-file flag.
    #[must_use]
    pub fn with_resume(mut self, has_resume: bool) -> Self {
        self.has_resume = Some(has_resume);
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Role, if the user picked one.
    pub fn role(&self) -> Option<UserRole> {
        self.role
    }

    /// Whether the user acts under `role`.
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == Some(role)
    }

    /// Company name for employers.
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Whether a resume is on file; `false` when never set.
    pub fn has_resume(&self) -> bool {
        self.has_resume.unwrap_or(false)
    }

    /// Merge editable fields into this user. Identifier and role are left
    /// untouched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            name,
            email,
            company,
            has_resume,
        } = update;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(company) = company {
            self.company = Some(company);
        }
        if let Some(has_resume) = has_resume {
            self.has_resume = Some(has_resume);
        }
    }
}

/// Fields supplied when registering a new user.
///
/// The identifier is minted by the session service, never supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Chosen role.
    #[serde(default)]
    pub role: Option<UserRole>,
    /// Company name, for employers.
    #[serde(default)]
    pub company: Option<String>,
    /// Resume-on-file flag, for job seekers.
    #[serde(default)]
    pub has_resume: Option<bool>,
}

impl UserRegistration {
    /// Registration input with name, email and role.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Option<UserRole>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
            company: None,
            has_resume: None,
        }
    }

    /// Attach a company name.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }
}

/// Partial profile edit. `None` leaves the current value in place.
///
/// # Examples
/// ```
/// use jobboard::domain::{ProfileUpdate, User, UserId, UserRole};
///
/// let mut user = User::new(
///     UserId::new("js1"),
///     "John Doe",
///     "jobseeker@example.com",
///     Some(UserRole::Jobseeker),
/// );
/// user.apply(ProfileUpdate::default().resume(true));
/// assert!(user.has_resume());
/// assert_eq!(user.name(), "John Doe");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement email.
    pub email: Option<String>,
    /// Replacement company name.
    pub company: Option<String>,
    /// Replacement resume flag.
    pub has_resume: Option<bool>,
}

impl ProfileUpdate {
    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the company name.
    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the resume flag.
    #[must_use]
    pub fn resume(mut self, has_resume: bool) -> Self {
        self.has_resume = Some(has_resume);
        self
    }
}
