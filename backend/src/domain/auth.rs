//! Authentication primitives: login credentials and the demonstration
//! credential directory.
//!
//! The directory is a closed, role-scoped set of accounts compared in
//! plaintext. It exists to let the demo sign in; it is not a credential store.

use demo_data::{AccountRole, DemoAccount, DemoCatalogue};
use tracing::error;
use zeroize::Zeroizing;

use super::{User, UserId, UserRole};

/// Login credentials exactly as the caller typed them.
///
/// No trimming or case folding is applied; matching is case-sensitive.
///
/// # Examples
/// ```
/// use jobboard::domain::LoginCredentials;
///
/// let creds = LoginCredentials::new("employer@example.com", "password");
/// assert_eq!(creds.email(), "employer@example.com");
/// assert_eq!(creds.password(), "password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Capture an email and password pair.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Email used for the lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

struct DirectoryEntry {
    role: UserRole,
    email: String,
    password: Zeroizing<String>,
    user: User,
}

/// Role-scoped set of known accounts.
///
/// # Examples
/// ```
/// use jobboard::domain::{CredentialDirectory, LoginCredentials, UserRole};
///
/// let directory = CredentialDirectory::demo();
/// let creds = LoginCredentials::new("jobseeker@example.com", "password");
/// let user = directory.authenticate(&creds, UserRole::Jobseeker).expect("demo job seeker");
/// assert_eq!(user.id().as_str(), "js1");
/// assert!(directory.authenticate(&creds, UserRole::Employer).is_none());
/// ```
pub struct CredentialDirectory {
    entries: Vec<DirectoryEntry>,
}

impl CredentialDirectory {
    /// Directory built from the bundled demonstration catalogue.
    ///
    /// A catalogue that fails to parse yields an empty directory so login
    /// simply fails rather than aborting startup.
    pub fn demo() -> Self {
        match DemoCatalogue::bundled() {
            Ok(catalogue) => Self::from_catalogue(&catalogue),
            Err(err) => {
                error!(error = %err, "bundled demo catalogue is invalid; login disabled");
                Self::empty()
            }
        }
    }

    /// Directory that recognises nobody.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Directory holding every account listed in `catalogue`.
    pub fn from_catalogue(catalogue: &DemoCatalogue) -> Self {
        Self {
            entries: catalogue.accounts().iter().map(entry_from_account).collect(),
        }
    }

    /// Find the user whose email and password match exactly within `role`.
    ///
    /// The returned user never carries the password.
    pub fn authenticate(&self, credentials: &LoginCredentials, role: UserRole) -> Option<User> {
        self.entries
            .iter()
            .find(|entry| {
                entry.role == role
                    && entry.email == credentials.email()
                    && entry.password.as_str() == credentials.password()
            })
            .map(|entry| entry.user.clone())
    }
}

fn role_from_account(role: AccountRole) -> UserRole {
    match role {
        AccountRole::Employer => UserRole::Employer,
        AccountRole::Jobseeker => UserRole::Jobseeker,
    }
}

fn entry_from_account(account: &DemoAccount) -> DirectoryEntry {
    let role = role_from_account(account.role);
    let mut user = User::new(
        UserId::new(account.id.as_str()),
        account.name.as_str(),
        account.email.as_str(),
        Some(role),
    );
    if let Some(company) = &account.company {
        user = user.with_company(company.as_str());
    }
    if let Some(has_resume) = account.has_resume {
        user = user.with_resume(has_resume);
    }
    DirectoryEntry {
        role,
        email: account.email.clone(),
        password: Zeroizing::new(account.password.clone()),
        user,
    }
}
