//! Session service: who is signed in, and under which role.
//!
//! The service owns the current-user state for the lifetime of the process
//! and mirrors it into the storage port's user record. Storage failures are
//! logged and swallowed; the in-memory session still reflects the caller's
//! action.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::BoardStorage;
use crate::domain::{
    CredentialDirectory, IdGenerator, LoginCredentials, ProfileUpdate, User, UserRegistration,
    UserRole,
};

/// Authentication and profile state for exactly one active user.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use jobboard::domain::{CredentialDirectory, LoginCredentials, SessionService, UserRole};
/// use jobboard::outbound::storage::InMemoryBoardStorage;
/// use mockable::DefaultClock;
///
/// let session = SessionService::restore(
///     Arc::new(InMemoryBoardStorage::new()),
///     CredentialDirectory::demo(),
///     Arc::new(DefaultClock),
/// );
/// let creds = LoginCredentials::new("employer@example.com", "password");
/// assert!(session.login(&creds, UserRole::Employer));
/// assert_eq!(session.user_role(), Some(UserRole::Employer));
/// ```
pub struct SessionService {
    storage: Arc<dyn BoardStorage>,
    directory: CredentialDirectory,
    ids: IdGenerator,
    current: RwLock<Option<User>>,
}

impl SessionService {
    /// Build the service, resuming any user persisted by a previous run.
    ///
    /// An unreadable or malformed user record is logged and treated as no
    /// session.
    pub fn restore(
        storage: Arc<dyn BoardStorage>,
        directory: CredentialDirectory,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let current = match storage.load_current_user() {
            Ok(user) => user,
            Err(error) => {
                warn!(%error, kind = error.kind(), "discarding unreadable session record");
                None
            }
        };
        if let Some(user) = &current {
            debug!(user_id = %user.id(), "resumed persisted session");
        }
        Self {
            storage,
            directory,
            ids: IdGenerator::new(clock),
            current: RwLock::new(current),
        }
    }

    /// Snapshot of the signed-in user.
    pub fn current_user(&self) -> Option<User> {
        self.read().clone()
    }

    /// Whether anyone is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// Role of the signed-in user; `None` when signed out or roleless.
    pub fn user_role(&self) -> Option<UserRole> {
        self.read().as_ref().and_then(User::role)
    }

    /// Run `f` against the signed-in user without cloning it.
    pub(crate) fn with_current<R>(&self, f: impl FnOnce(Option<&User>) -> R) -> R {
        f(self.read().as_ref())
    }

    /// Sign in with a demonstration account.
    ///
    /// Returns `true` and replaces the session when the directory holds an
    /// exact match for `credentials` within `role`. Otherwise returns `false`
    /// and leaves any existing session untouched.
    pub fn login(&self, credentials: &LoginCredentials, role: UserRole) -> bool {
        let Some(user) = self.directory.authenticate(credentials, role) else {
            debug!(%role, "login rejected");
            return false;
        };
        info!(user_id = %user.id(), %role, "user signed in");
        self.replace_session(user);
        true
    }

    /// Create a user from `registration` under a fresh identifier and sign
    /// them in. Always succeeds.
    ///
    /// The password is accepted for parity with the sign-up form but is not
    /// stored, so a registered user cannot later sign in via [`Self::login`].
    pub fn register(&self, registration: UserRegistration, _password: &str) -> bool {
        let user = User::from_registration(self.ids.next_user_id(), registration);
        info!(user_id = %user.id(), role = ?user.role(), "user registered");
        self.replace_session(user);
        true
    }

    /// Sign out.
    ///
    /// Clears the session and its persisted record, and also removes the
    /// persisted postings collection. Applications are kept.
    pub fn logout(&self) {
        let previous = self.write().take();
        if let Some(user) = previous {
            info!(user_id = %user.id(), "user signed out");
        }
        if let Err(error) = self.storage.clear_current_user() {
            warn!(%error, kind = error.kind(), "failed to clear persisted session");
        }
        if let Err(error) = self.storage.clear_jobs() {
            warn!(
                %error,
                kind = error.kind(),
                "failed to clear persisted postings on logout"
            );
        }
    }

    /// Merge `update` into the signed-in user and persist the result.
    ///
    /// Does nothing when nobody is signed in. Identifier and role never
    /// change.
    pub fn update_user_profile(&self, update: ProfileUpdate) {
        let updated = {
            let mut guard = self.write();
            let Some(user) = guard.as_mut() else {
                debug!("profile update ignored without a session");
                return;
            };
            user.apply(update);
            user.clone()
        };
        self.persist(&updated);
    }

    fn replace_session(&self, user: User) {
        *self.write() = Some(user.clone());
        self.persist(&user);
    }

    fn persist(&self, user: &User) {
        if let Err(error) = self.storage.save_current_user(user) {
            warn!(
                %error,
                kind = error.kind(),
                user_id = %user.id(),
                "failed to persist session"
            );
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<User>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<User>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "session_service_tests.rs"]
mod tests;
