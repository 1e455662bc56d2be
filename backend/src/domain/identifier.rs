//! Record identifiers and their generator.
//!
//! Identifiers follow the `<prefix>-<unix millis>` shape (`user-…`, `job-…`,
//! `app-…`). Seeded and demonstration records carry hand-picked identifiers
//! such as `"1"` or `"emp1"`, so the newtypes accept any string.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use mockable::Clock;

macro_rules! define_record_id {
    ($(#[$outer:meta])* $name:ident) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_record_id! {
    /// Identifier of a user, either generated at registration or fixed for a
    /// demonstration account.
    UserId
}

define_record_id! {
    /// Identifier of a job posting.
    JobId
}

define_record_id! {
    /// Identifier of an application.
    ApplicationId
}

/// Mints time-derived identifiers and creation timestamps.
///
/// Identifiers embed the clock's Unix milliseconds. When the clock has not
/// advanced since the previous call the generator uses the previous value
/// plus one, so identifiers from one generator never repeat.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use jobboard::domain::IdGenerator;
/// use mockable::DefaultClock;
///
/// let ids = IdGenerator::new(Arc::new(DefaultClock));
/// let first = ids.next_user_id();
/// let second = ids.next_user_id();
/// assert_ne!(first, second);
/// assert!(first.as_str().starts_with("user-"));
/// ```
pub struct IdGenerator {
    clock: Arc<dyn Clock>,
    last_millis: AtomicI64,
}

impl IdGenerator {
    /// Create a generator reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last_millis: AtomicI64::new(i64::MIN),
        }
    }

    /// Current UTC time according to the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Fresh identifier for a registered user.
    pub fn next_user_id(&self) -> UserId {
        UserId::new(format!("user-{}", self.next_millis()))
    }

    /// Fresh identifier for a job posting.
    pub fn next_job_id(&self) -> JobId {
        JobId::new(format!("job-{}", self.next_millis()))
    }

    /// Fresh identifier for an application.
    pub fn next_application_id(&self) -> ApplicationId {
        ApplicationId::new(format!("app-{}", self.next_millis()))
    }

    fn next_millis(&self) -> i64 {
        let now = self.clock.utc().timestamp_millis();
        let mut last = self.last_millis.load(Ordering::Acquire);
        loop {
            let candidate = now.max(last.saturating_add(1));
            match self.last_millis.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}
