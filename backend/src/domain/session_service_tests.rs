//! Tests for the session service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{BoardStorageError, MockBoardStorage};
use crate::outbound::storage::InMemoryBoardStorage;
use crate::test_support::MutableClock;
use chrono::TimeDelta;
use rstest::{fixture, rstest};

fn employer_creds() -> LoginCredentials {
    LoginCredentials::new("employer@example.com", "password")
}

fn jobseeker_creds() -> LoginCredentials {
    LoginCredentials::new("jobseeker@example.com", "password")
}

fn service_over(storage: Arc<dyn BoardStorage>) -> SessionService {
    SessionService::restore(
        storage,
        CredentialDirectory::demo(),
        Arc::new(MutableClock::fixed()),
    )
}

#[fixture]
fn storage() -> Arc<InMemoryBoardStorage> {
    Arc::new(InMemoryBoardStorage::new())
}

#[rstest]
#[case(employer_creds(), UserRole::Employer, "emp1")]
#[case(jobseeker_creds(), UserRole::Jobseeker, "js1")]
fn demo_login_sets_and_persists_user(
    storage: Arc<InMemoryBoardStorage>,
    #[case] creds: LoginCredentials,
    #[case] role: UserRole,
    #[case] expected_id: &str,
) {
    let session = service_over(storage.clone());

    assert!(session.login(&creds, role));
    assert!(session.is_authenticated());
    assert_eq!(session.user_role(), Some(role));

    let persisted = storage
        .load_current_user()
        .expect("load user")
        .expect("user persisted");
    assert_eq!(persisted.id().as_str(), expected_id);
}

#[rstest]
fn failed_login_keeps_prior_session(storage: Arc<InMemoryBoardStorage>) {
    let session = service_over(storage.clone());
    assert!(session.login(&jobseeker_creds(), UserRole::Jobseeker));

    assert!(!session.login(&employer_creds(), UserRole::Jobseeker));
    assert!(!session.login(
        &LoginCredentials::new("jobseeker@example.com", "wrong"),
        UserRole::Jobseeker
    ));

    let current = session.current_user().expect("session kept");
    assert_eq!(current.id().as_str(), "js1");
    let persisted = storage.load_current_user().expect("load").expect("persisted");
    assert_eq!(persisted.id().as_str(), "js1");
}

#[rstest]
fn failed_login_without_session_writes_nothing(storage: Arc<InMemoryBoardStorage>) {
    let session = service_over(storage.clone());

    assert!(!session.login(&employer_creds(), UserRole::Jobseeker));
    assert!(!session.is_authenticated());
    assert!(storage.load_current_user().expect("load").is_none());
}

#[rstest]
fn register_mints_distinct_identifiers(storage: Arc<InMemoryBoardStorage>) {
    let session = service_over(storage);

    assert!(session.register(
        UserRegistration::new("Ann", "ann@example.com", Some(UserRole::Jobseeker)),
        "secret"
    ));
    let first = session.current_user().expect("registered");

    assert!(session.register(
        UserRegistration::new("Acme", "hr@acme.test", Some(UserRole::Employer))
            .with_company("Acme"),
        "secret"
    ));
    let second = session.current_user().expect("registered");

    assert_ne!(first.id(), second.id());
    assert!(first.id().as_str().starts_with("user-"));
    assert_eq!(second.company(), Some("Acme"));
    assert_eq!(session.user_role(), Some(UserRole::Employer));
}

#[rstest]
fn registered_password_does_not_enable_login(storage: Arc<InMemoryBoardStorage>) {
    let session = service_over(storage);
    session.register(
        UserRegistration::new("Ann", "ann@example.com", Some(UserRole::Jobseeker)),
        "secret",
    );
    session.logout();

    assert!(!session.login(
        &LoginCredentials::new("ann@example.com", "secret"),
        UserRole::Jobseeker
    ));
}

#[rstest]
fn register_follows_the_clock(storage: Arc<InMemoryBoardStorage>) {
    let clock = Arc::new(MutableClock::fixed());
    let session = SessionService::restore(storage, CredentialDirectory::demo(), clock.clone());

    clock.advance(TimeDelta::milliseconds(250));
    session.register(UserRegistration::new("Ann", "ann@example.com", None), "pw");

    let expected = format!("user-{}", clock.utc().timestamp_millis());
    let user = session.current_user().expect("registered");
    assert_eq!(user.id().as_str(), expected);
    assert_eq!(session.user_role(), None);
    assert!(session.is_authenticated());
}

#[rstest]
fn logout_clears_user_and_postings_but_not_applications(storage: Arc<InMemoryBoardStorage>) {
    let session = service_over(storage.clone());
    session.login(&employer_creds(), UserRole::Employer);
    storage.save_jobs(&[]).expect("seed jobs record");
    storage.save_applications(&[]).expect("seed applications record");

    session.logout();

    assert!(!session.is_authenticated());
    assert_eq!(session.user_role(), None);
    assert!(storage.load_current_user().expect("load").is_none());
    assert!(storage.load_jobs().expect("load").is_none());
    assert!(storage.load_applications().expect("load").is_some());
}

#[rstest]
fn profile_update_merges_and_persists(storage: Arc<InMemoryBoardStorage>) {
    let session = service_over(storage.clone());
    session.login(&jobseeker_creds(), UserRole::Jobseeker);

    session.update_user_profile(ProfileUpdate::default().name("Jane Doe").resume(true));

    let current = session.current_user().expect("session");
    assert_eq!(current.name(), "Jane Doe");
    assert!(current.has_resume());
    assert_eq!(current.id().as_str(), "js1");
    assert_eq!(current.role(), Some(UserRole::Jobseeker));
    assert_eq!(storage.load_current_user().expect("load"), Some(current));
}

#[rstest]
fn profile_update_without_session_is_ignored(storage: Arc<InMemoryBoardStorage>) {
    let session = service_over(storage.clone());

    session.update_user_profile(ProfileUpdate::default().name("Ghost"));

    assert!(session.current_user().is_none());
    assert!(storage.load_current_user().expect("load").is_none());
}

#[rstest]
fn restore_resumes_persisted_user(storage: Arc<InMemoryBoardStorage>) {
    service_over(storage.clone()).login(&employer_creds(), UserRole::Employer);

    let resumed = service_over(storage);
    assert_eq!(resumed.user_role(), Some(UserRole::Employer));
    assert_eq!(
        resumed.current_user().map(|u| u.id().to_string()),
        Some("emp1".to_owned())
    );
}

#[rstest]
fn unreadable_session_record_means_signed_out() {
    let mut storage = MockBoardStorage::new();
    storage
        .expect_load_current_user()
        .times(1)
        .return_once(|| Err(BoardStorageError::serialization("expected value")));

    let session = service_over(Arc::new(storage));
    assert!(!session.is_authenticated());
}

#[rstest]
fn storage_failures_do_not_block_login_or_logout() {
    let mut storage = MockBoardStorage::new();
    storage.expect_load_current_user().return_once(|| Ok(None));
    storage
        .expect_save_current_user()
        .times(1)
        .returning(|_| Err(BoardStorageError::io("disk full")));
    storage
        .expect_clear_current_user()
        .times(1)
        .returning(|| Err(BoardStorageError::io("disk full")));
    storage
        .expect_clear_jobs()
        .times(1)
        .returning(|| Err(BoardStorageError::io("disk full")));

    let session = service_over(Arc::new(storage));
    assert!(session.login(&employer_creds(), UserRole::Employer));
    assert!(session.is_authenticated());

    session.logout();
    assert!(!session.is_authenticated());
}
