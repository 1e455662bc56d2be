//! Job applications.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ApplicationId, JobId, UserId};

/// Resume reference used when an applicant submits without uploading one.
pub const PLACEHOLDER_RESUME_URL: &str = "https://example.com/resume.pdf";

/// Review status of an application.
///
/// Applications are created as [`ApplicationStatus::Submitted`]; no
/// operation moves them along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Freshly submitted.
    #[default]
    Submitted,
    /// Seen by the employer.
    Reviewed,
    /// Applicant was interviewed.
    Interviewed,
    /// Applicant was turned down.
    Rejected,
    /// Applicant was offered the job.
    Accepted,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Submitted => "submitted",
            Self::Reviewed => "reviewed",
            Self::Interviewed => "interviewed",
            Self::Rejected => "rejected",
            Self::Accepted => "accepted",
        };
        f.write_str(label)
    }
}

/// An application by a user to a posting.
///
/// ## Invariants
/// - Immutable once created; fields are read through accessors only.
/// - `job_id` is not guaranteed to reference an existing posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    id: ApplicationId,
    job_id: JobId,
    user_id: UserId,
    resume_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cover_letter: Option<String>,
    status: ApplicationStatus,
    created_at: DateTime<Utc>,
}

impl Application {
    /// A freshly submitted application.
    pub fn submit(
        id: ApplicationId,
        user_id: UserId,
        created_at: DateTime<Utc>,
        request: ApplicationRequest,
    ) -> Self {
        let ApplicationRequest {
            job_id,
            resume_url,
            cover_letter,
        } = request;
        Self {
            id,
            job_id,
            user_id,
            resume_url,
            cover_letter,
            status: ApplicationStatus::Submitted,
            created_at,
        }
    }

    /// Application identifier.
    pub fn id(&self) -> &ApplicationId {
        &self.id
    }

    /// Posting applied to.
    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    /// Applicant.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Resume URL or blob reference.
    pub fn resume_url(&self) -> &str {
        self.resume_url.as_str()
    }

    /// Cover letter, if one was written.
    pub fn cover_letter(&self) -> Option<&str> {
        self.cover_letter.as_deref()
    }

    /// Review status.
    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    /// Submission time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether `user_id` applied to `job_id` with this application.
    pub fn is_for(&self, job_id: &JobId, user_id: &UserId) -> bool {
        &self.job_id == job_id && &self.user_id == user_id
    }
}

/// What an applicant submits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    /// Posting applied to.
    pub job_id: JobId,
    /// Resume URL or blob reference.
    pub resume_url: String,
    /// Optional cover letter.
    #[serde(default)]
    pub cover_letter: Option<String>,
}

impl ApplicationRequest {
    /// Request with an explicit resume reference.
    pub fn new(job_id: JobId, resume_url: impl Into<String>, cover_letter: Option<String>) -> Self {
        Self {
            job_id,
            resume_url: resume_url.into(),
            cover_letter,
        }
    }

    /// Request using the uploaded resume reference, or
    /// [`PLACEHOLDER_RESUME_URL`] when nothing was uploaded.
    ///
    /// # Examples
    /// ```
    /// use jobboard::domain::{ApplicationRequest, JobId, PLACEHOLDER_RESUME_URL};
    ///
    /// let request = ApplicationRequest::with_upload(JobId::new("1"), None, None);
    /// assert_eq!(request.resume_url, PLACEHOLDER_RESUME_URL);
    /// ```
    pub fn with_upload(
        job_id: JobId,
        uploaded_resume: Option<String>,
        cover_letter: Option<String>,
    ) -> Self {
        let resume_url = uploaded_resume.unwrap_or_else(|| PLACEHOLDER_RESUME_URL.to_owned());
        Self::new(job_id, resume_url, cover_letter)
    }
}
