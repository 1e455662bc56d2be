//! Tests for the job board service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{BoardStorage, BoardStorageError, MockBoardStorage};
use crate::domain::{ApplicationStatus, CredentialDirectory, LoginCredentials, UserRegistration};
use crate::outbound::storage::InMemoryBoardStorage;
use crate::test_support::MutableClock;
use rstest::{fixture, rstest};

struct Board {
    storage: Arc<InMemoryBoardStorage>,
    session: Arc<SessionService>,
    jobs: JobBoardService,
}

fn board_over(storage: Arc<InMemoryBoardStorage>) -> Board {
    let clock: Arc<dyn Clock> = Arc::new(MutableClock::fixed());
    let session = Arc::new(SessionService::restore(
        storage.clone(),
        CredentialDirectory::demo(),
        clock.clone(),
    ));
    let jobs = JobBoardService::load(storage.clone(), session.clone(), clock);
    Board {
        storage,
        session,
        jobs,
    }
}

#[fixture]
fn board() -> Board {
    board_over(Arc::new(InMemoryBoardStorage::new()))
}

fn posting_fields(title: &str) -> NewJobPosting {
    NewJobPosting {
        title: title.to_owned(),
        company: "Acme".to_owned(),
        location: "Remote".to_owned(),
        description: "Ship it".to_owned(),
        requirements: vec!["Rust".to_owned()],
        salary: None,
        job_type: None,
    }
}

fn sign_in_employer(session: &SessionService) {
    assert!(session.login(
        &LoginCredentials::new("employer@example.com", "password"),
        UserRole::Employer
    ));
}

fn sign_in_jobseeker(session: &SessionService) {
    assert!(session.login(
        &LoginCredentials::new("jobseeker@example.com", "password"),
        UserRole::Jobseeker
    ));
}

#[rstest]
fn first_load_seeds_and_persists_demo_postings(board: Board) {
    let ids: Vec<String> = board.jobs.jobs().iter().map(|j| j.id().to_string()).collect();
    assert_eq!(ids, ["1", "2", "3"]);

    let persisted = board.storage.load_jobs().expect("load").expect("seeded record");
    assert_eq!(persisted, board.jobs.jobs());
    assert!(board.jobs.get_user_applications().is_empty());
}

#[rstest]
fn existing_postings_are_loaded_verbatim() {
    let storage = Arc::new(InMemoryBoardStorage::new());
    storage.save_jobs(&[]).expect("write empty record");

    let board = board_over(storage);
    assert!(board.jobs.jobs().is_empty());
}

#[rstest]
fn add_job_requires_a_session(board: Board) {
    assert!(board.jobs.add_job(posting_fields("Ghost")).is_none());
    assert_eq!(board.jobs.jobs().len(), 3);
}

#[rstest]
fn add_job_stamps_owner_and_persists(board: Board) {
    sign_in_employer(&board.session);

    let posting = board.jobs.add_job(posting_fields("Rust Engineer")).expect("posted");

    assert_eq!(posting.employer_id().as_str(), "emp1");
    assert!(posting.id().as_str().starts_with("job-"));
    assert_eq!(posting.job_type(), "Full-time");
    let persisted = board.storage.load_jobs().expect("load").expect("record");
    assert_eq!(persisted.last(), Some(&posting));
    assert_eq!(persisted.len(), 4);
}

#[rstest]
fn employer_jobs_include_seeded_ownership(board: Board) {
    sign_in_employer(&board.session);
    let posted = board.jobs.add_job(posting_fields("Rust Engineer")).expect("posted");

    let owned: Vec<String> = board
        .jobs
        .get_employer_jobs()
        .iter()
        .map(|j| j.id().to_string())
        .collect();
    assert_eq!(owned, ["1".to_owned(), posted.id().to_string()]);
}

#[rstest]
fn employer_jobs_are_scoped_per_employer(board: Board) {
    board.session.register(
        UserRegistration::new("A", "a@example.com", Some(UserRole::Employer)),
        "pw",
    );
    let job_j = board.jobs.add_job(posting_fields("J")).expect("posted J");
    let employer_a = board.session.current_user().expect("employer A");

    board.session.register(
        UserRegistration::new("B", "b@example.com", Some(UserRole::Employer)),
        "pw",
    );
    let job_k = board.jobs.add_job(posting_fields("K")).expect("posted K");

    assert_eq!(board.jobs.get_employer_jobs(), vec![job_k]);
    assert_eq!(job_j.employer_id(), employer_a.id());

    let resumed = Arc::new(InMemoryBoardStorage::new());
    resumed.save_current_user(&employer_a).expect("save A");
    resumed.save_jobs(&board.jobs.jobs()).expect("save postings");
    let as_a = board_over(resumed);

    assert_eq!(as_a.session.current_user(), Some(employer_a));
    assert_eq!(as_a.jobs.get_employer_jobs(), vec![job_j]);
}

#[rstest]
fn jobseekers_have_no_employer_jobs(board: Board) {
    sign_in_jobseeker(&board.session);
    board.jobs.add_job(posting_fields("Odd")).expect("role is not checked");

    assert!(board.jobs.get_employer_jobs().is_empty());
}

#[rstest]
fn applications_are_scoped_to_the_applicant(board: Board) {
    sign_in_jobseeker(&board.session);
    let job = JobId::new("2");
    let application = board
        .jobs
        .apply_to_job(ApplicationRequest::new(job.clone(), "blob:cv", None))
        .expect("applied");

    assert!(board.jobs.has_applied(&job));
    assert!(!board.jobs.has_applied(&JobId::new("1")));
    assert_eq!(board.jobs.get_user_applications(), vec![application]);
    assert_eq!(board.jobs.applied_job_ids(), vec![job.clone()]);

    board.session.register(
        UserRegistration::new("Other", "o@example.com", Some(UserRole::Jobseeker)),
        "pw",
    );
    assert!(!board.jobs.has_applied(&job));
    assert!(board.jobs.get_user_applications().is_empty());
}

#[rstest]
fn apply_without_session_is_ignored(board: Board) {
    let result = board
        .jobs
        .apply_to_job(ApplicationRequest::new(JobId::new("1"), "blob:cv", None));

    assert!(result.is_none());
    assert!(!board.jobs.has_applied(&JobId::new("1")));
    assert!(board.storage.load_applications().expect("load").is_none());
}

#[rstest]
fn apply_skips_existence_and_role_checks(board: Board) {
    sign_in_employer(&board.session);
    let application = board
        .jobs
        .apply_to_job(ApplicationRequest::new(
            JobId::new("missing"),
            "blob:cv",
            Some("Hi".to_owned()),
        ))
        .expect("no checks applied");

    assert_eq!(application.status(), ApplicationStatus::Submitted);
    assert_eq!(application.user_id().as_str(), "emp1");
    let persisted = board
        .storage
        .load_applications()
        .expect("load")
        .expect("record");
    assert_eq!(persisted, vec![application]);
}

#[rstest]
fn logout_clears_persisted_postings_and_scoping(board: Board) {
    sign_in_employer(&board.session);
    board.jobs.add_job(posting_fields("Rust Engineer")).expect("posted");

    board.session.logout();

    assert!(board.jobs.get_employer_jobs().is_empty());
    assert!(board.storage.load_jobs().expect("load").is_none());
}

#[rstest]
fn get_job_by_id_finds_or_misses(board: Board) {
    let found = board.jobs.get_job_by_id(&JobId::new("3")).expect("seeded");
    assert_eq!(found.title(), "UX Designer");
    assert!(board.jobs.get_job_by_id(&JobId::new("404")).is_none());
}

#[rstest]
fn search_covers_requirements(board: Board) {
    let hits = board.jobs.search_jobs("express");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id().as_str(), "2");
    assert_eq!(board.jobs.search_jobs("").len(), 3);
}

#[rstest]
fn posted_job_survives_a_reload(board: Board) {
    sign_in_employer(&board.session);
    let posting = board.jobs.add_job(posting_fields("Rust Engineer")).expect("posted");

    let reloaded = board_over(board.storage.clone());
    assert_eq!(reloaded.jobs.get_job_by_id(posting.id()), Some(posting));
}

#[rstest]
fn unreadable_records_degrade_to_empty_without_seeding() {
    let mut storage = MockBoardStorage::new();
    storage.expect_load_current_user().return_once(|| Ok(None));
    storage
        .expect_load_jobs()
        .return_once(|| Err(BoardStorageError::serialization("expected `[`")));
    storage
        .expect_load_applications()
        .return_once(|| Err(BoardStorageError::io("unreadable")));
    storage.expect_save_jobs().never();

    let storage: Arc<dyn BoardStorage> = Arc::new(storage);
    let clock: Arc<dyn Clock> = Arc::new(MutableClock::fixed());
    let session = Arc::new(SessionService::restore(
        storage.clone(),
        CredentialDirectory::demo(),
        clock.clone(),
    ));
    let jobs = JobBoardService::load(storage, session, clock);

    assert!(jobs.jobs().is_empty());
    assert!(jobs.get_user_applications().is_empty());
}

#[rstest]
fn write_failures_keep_the_in_memory_change() {
    let mut storage = MockBoardStorage::new();
    storage.expect_load_current_user().return_once(|| Ok(None));
    storage.expect_save_current_user().returning(|_| Ok(()));
    storage.expect_load_jobs().return_once(|| Ok(Some(Vec::new())));
    storage.expect_load_applications().return_once(|| Ok(None));
    storage
        .expect_save_jobs()
        .times(1)
        .returning(|_| Err(BoardStorageError::io("disk full")));

    let storage: Arc<dyn BoardStorage> = Arc::new(storage);
    let clock: Arc<dyn Clock> = Arc::new(MutableClock::fixed());
    let session = Arc::new(SessionService::restore(
        storage.clone(),
        CredentialDirectory::demo(),
        clock.clone(),
    ));
    let jobs = JobBoardService::load(storage, session.clone(), clock);
    sign_in_employer(&session);

    let posting = jobs.add_job(posting_fields("Rust Engineer")).expect("posted");
    assert_eq!(jobs.jobs(), vec![posting]);
}
