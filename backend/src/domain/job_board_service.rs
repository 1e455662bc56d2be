//! Job board service: postings and applications scoped by the session.
//!
//! Every mutation appends to the in-memory collection and rewrites the whole
//! record through the storage port. Write failures are logged; the in-memory
//! collection keeps the change so the caller sees what it just did.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::BoardStorage;
use crate::domain::{
    Application, ApplicationRequest, IdGenerator, JobId, JobPosting, NewJobPosting,
    SessionService, UserRole, demo_postings, search_postings,
};

struct BoardState {
    jobs: Vec<JobPosting>,
    applications: Vec<Application>,
}

/// Postings and applications, scoped by the current session.
///
/// Collections are handed out as owned snapshots; changes only happen
/// through the service's operations.
pub struct JobBoardService {
    storage: Arc<dyn BoardStorage>,
    session: Arc<SessionService>,
    ids: IdGenerator,
    state: RwLock<BoardState>,
}

impl JobBoardService {
    /// Load both collections from storage.
    ///
    /// A missing postings record is seeded with the demonstration postings,
    /// which are persisted straight away. A missing applications record is
    /// an empty collection. Unreadable records are logged and treated as
    /// empty; nothing is seeded over them.
    pub fn load(
        storage: Arc<dyn BoardStorage>,
        session: Arc<SessionService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let ids = IdGenerator::new(clock);
        let jobs = match storage.load_jobs() {
            Ok(Some(jobs)) => jobs,
            Ok(None) => {
                let seeded = demo_postings(ids.now());
                info!(count = seeded.len(), "seeding demonstration postings");
                if let Err(error) = storage.save_jobs(&seeded) {
                    warn!(%error, kind = error.kind(), "failed to persist seeded postings");
                }
                seeded
            }
            Err(error) => {
                warn!(%error, kind = error.kind(), "discarding unreadable postings record");
                Vec::new()
            }
        };
        let applications = match storage.load_applications() {
            Ok(applications) => applications.unwrap_or_default(),
            Err(error) => {
                warn!(
                    %error,
                    kind = error.kind(),
                    "discarding unreadable applications record"
                );
                Vec::new()
            }
        };
        Self {
            storage,
            session,
            ids,
            state: RwLock::new(BoardState { jobs, applications }),
        }
    }

    /// Snapshot of every posting in insertion order.
    pub fn jobs(&self) -> Vec<JobPosting> {
        self.read().jobs.clone()
    }

    /// Post a job as the signed-in user.
    ///
    /// Returns `None` without touching anything when nobody is signed in.
    /// The acting role is not checked.
    pub fn add_job(&self, fields: NewJobPosting) -> Option<JobPosting> {
        let Some(employer_id) = self.session.with_current(|user| user.map(|u| u.id().clone()))
        else {
            debug!("add_job ignored without a session");
            return None;
        };
        let posting =
            JobPosting::create(self.ids.next_job_id(), employer_id, self.ids.now(), fields);

        let mut state = self.write();
        state.jobs.push(posting.clone());
        if let Err(error) = self.storage.save_jobs(&state.jobs) {
            warn!(
                %error,
                kind = error.kind(),
                job_id = %posting.id(),
                "failed to persist postings"
            );
        }
        info!(job_id = %posting.id(), employer_id = %posting.employer_id(), "job posted");
        Some(posting)
    }

    /// Apply to a posting as the signed-in user.
    ///
    /// Returns `None` without touching anything when nobody is signed in.
    /// Neither the posting's existence nor the acting role is checked; see
    /// [`crate::domain::apply_eligibility`] for the caller-side gate.
    pub fn apply_to_job(&self, request: ApplicationRequest) -> Option<Application> {
        let Some(user_id) = self.session.with_current(|user| user.map(|u| u.id().clone())) else {
            debug!("apply_to_job ignored without a session");
            return None;
        };
        let application =
            Application::submit(self.ids.next_application_id(), user_id, self.ids.now(), request);

        let mut state = self.write();
        state.applications.push(application.clone());
        if let Err(error) = self.storage.save_applications(&state.applications) {
            warn!(
                %error,
                kind = error.kind(),
                application_id = %application.id(),
                "failed to persist applications"
            );
        }
        info!(
            application_id = %application.id(),
            job_id = %application.job_id(),
            user_id = %application.user_id(),
            "application submitted"
        );
        Some(application)
    }

    /// Applications submitted by the signed-in user, in submission order.
    pub fn get_user_applications(&self) -> Vec<Application> {
        self.session.with_current(|user| {
            let Some(user) = user else {
                return Vec::new();
            };
            self.read()
                .applications
                .iter()
                .filter(|application| application.user_id() == user.id())
                .cloned()
                .collect()
        })
    }

    /// Postings owned by the signed-in user when they are an employer.
    pub fn get_employer_jobs(&self) -> Vec<JobPosting> {
        self.session.with_current(|user| match user {
            Some(user) if user.has_role(UserRole::Employer) => self
                .read()
                .jobs
                .iter()
                .filter(|job| job.employer_id() == user.id())
                .cloned()
                .collect(),
            _ => Vec::new(),
        })
    }

    /// The posting with identifier `id`.
    pub fn get_job_by_id(&self, id: &JobId) -> Option<JobPosting> {
        self.read().jobs.iter().find(|job| job.id() == id).cloned()
    }

    /// Whether the signed-in user already applied to `job_id`.
    pub fn has_applied(&self, job_id: &JobId) -> bool {
        self.session.with_current(|user| {
            user.is_some_and(|user| {
                self.read()
                    .applications
                    .iter()
                    .any(|application| application.is_for(job_id, user.id()))
            })
        })
    }

    /// Identifiers of postings the signed-in user applied to, in submission
    /// order.
    pub fn applied_job_ids(&self) -> Vec<JobId> {
        self.get_user_applications()
            .into_iter()
            .map(|application| application.job_id().clone())
            .collect()
    }

    /// Postings matching a free-text term; a blank term returns them all.
    pub fn search_jobs(&self, term: &str) -> Vec<JobPosting> {
        search_postings(&self.read().jobs, term)
    }

    fn read(&self) -> RwLockReadGuard<'_, BoardState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BoardState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "job_board_service_tests.rs"]
mod tests;
