//! Test utilities for the job board crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled when running tests or
//! when the `test-support` feature is enabled.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{CredentialDirectory, JobBoardService, SessionService};
use crate::domain::ports::BoardStorage;

/// Clock frozen at a chosen instant until a test moves it.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    /// Start the clock at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Start the clock at a fixed instant in March 2026.
    pub fn fixed() -> Self {
        let now = Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self::new(now)
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        *self.lock_clock() += delta;
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Session and job board services sharing one storage adapter and clock.
pub struct BoardHarness {
    /// Shared clock; advance it to mint later identifiers.
    pub clock: Arc<MutableClock>,
    /// Session state.
    pub session: Arc<SessionService>,
    /// Postings and applications.
    pub board: JobBoardService,
}

impl BoardHarness {
    /// Wire both services over `storage` with the demonstration accounts.
    pub fn over(storage: Arc<dyn BoardStorage>) -> Self {
        let clock = Arc::new(MutableClock::fixed());
        let session = Arc::new(SessionService::restore(
            storage.clone(),
            CredentialDirectory::demo(),
            clock.clone(),
        ));
        let board = JobBoardService::load(storage, session.clone(), clock.clone());
        Self {
            clock,
            session,
            board,
        }
    }
}
