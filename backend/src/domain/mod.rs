//! Domain primitives, services, and ports.
//!
//! Purpose: Define the job board's records, the rules that scope them to the
//! signed-in user, and the storage port through which they persist. Nothing
//! here depends on actix or on a concrete storage adapter.
//!
//! Public surface:
//! - SessionService: sign-in, registration, sign-out and profile edits.
//! - JobBoardService: postings and applications scoped by the session.
//! - ports::BoardStorage: load and save of the `user`, `jobs` and
//!   `applications` records.
//! - Page and apply_eligibility: navigation gates callers apply on top.

pub mod access;
pub mod application;
pub mod auth;
pub mod identifier;
pub mod job;
pub mod job_board_service;
pub mod ports;
pub mod seed;
pub mod session_service;
pub mod user;

pub use self::access::{
    Access, ApplyEligibility, Page, apply_eligibility, landing_after_login,
    landing_after_register,
};
pub use self::application::{
    Application, ApplicationRequest, ApplicationStatus, PLACEHOLDER_RESUME_URL,
};
pub use self::auth::{CredentialDirectory, LoginCredentials};
pub use self::identifier::{ApplicationId, IdGenerator, JobId, UserId};
pub use self::job::{
    DEFAULT_JOB_TYPE, FALLBACK_COMPANY, JobPosting, NewJobPosting, PostingForm,
    PostingValidationError, parse_requirements, search_postings,
};
pub use self::job_board_service::JobBoardService;
pub use self::seed::demo_postings;
pub use self::session_service::SessionService;
pub use self::user::{ProfileUpdate, User, UserRegistration, UserRole};
