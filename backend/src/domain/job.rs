//! Job posting model, posting-form parsing and keyword search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{JobId, UserId};

/// Employment type reported when a posting does not name one.
pub const DEFAULT_JOB_TYPE: &str = "Full-time";

/// Company name used when an employer posts without one on file.
pub const FALLBACK_COMPANY: &str = "Company Name";

/// A job posting.
///
/// ## Invariants
/// - `employer_id` is stamped once at creation from the acting user and is
///   never reassigned; there is no setter.
/// - `salary` and `job_type` keep presence/absence exactly as stored.
///
/// Serialised as camelCase JSON with `job_type` written as `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    id: JobId,
    title: String,
    company: String,
    location: String,
    description: String,
    requirements: Vec<String>,
    employer_id: UserId,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    salary: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    job_type: Option<String>,
}

impl JobPosting {
    /// Stamp a new posting with its identifier, owner and creation time.
    pub fn create(
        id: JobId,
        employer_id: UserId,
        created_at: DateTime<Utc>,
        fields: NewJobPosting,
    ) -> Self {
        let NewJobPosting {
            title,
            company,
            location,
            description,
            requirements,
            salary,
            job_type,
        } = fields;
        Self {
            id,
            title,
            company,
            location,
            description,
            requirements,
            employer_id,
            created_at,
            salary,
            job_type,
        }
    }

    /// Posting identifier.
    pub fn id(&self) -> &JobId {
        &self.id
    }

    /// Job title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Hiring company.
    pub fn company(&self) -> &str {
        self.company.as_str()
    }

    /// Free-form location.
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Requirement lines in posting order.
    pub fn requirements(&self) -> &[String] {
        &self.requirements
    }

    /// Identifier of the employer that created the posting.
    pub fn employer_id(&self) -> &UserId {
        &self.employer_id
    }

    /// Creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Salary range, if one was given.
    pub fn salary(&self) -> Option<&str> {
        self.salary.as_deref()
    }

    /// Employment type, defaulting to [`DEFAULT_JOB_TYPE`].
    pub fn job_type(&self) -> &str {
        self.job_type.as_deref().unwrap_or(DEFAULT_JOB_TYPE)
    }

    /// Whether the posting mentions `term` (already lowercased) in its title,
    /// company, description, location or any requirement.
    fn mentions(&self, term: &str) -> bool {
        [
            self.title.as_str(),
            self.company.as_str(),
            self.description.as_str(),
            self.location.as_str(),
        ]
        .into_iter()
        .chain(self.requirements.iter().map(String::as_str))
        .any(|field| field.to_lowercase().contains(term))
    }
}

/// Caller-supplied fields for a new posting. Identifier, owner and creation
/// time are stamped by the job board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobPosting {
    /// Job title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Free-form location.
    pub location: String,
    /// Free-text description.
    pub description: String,
    /// Requirement lines.
    pub requirements: Vec<String>,
    /// Optional salary range.
    #[serde(default)]
    pub salary: Option<String>,
    /// Optional employment type.
    #[serde(default, rename = "type")]
    pub job_type: Option<String>,
}

/// Validation errors raised while turning a [`PostingForm`] into a posting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostingValidationError {
    /// Every requirement line was blank.
    #[error("at least one requirement is needed")]
    NoRequirements,
}

/// Raw posting form as an employer fills it in.
///
/// Requirements arrive as one block of text with one requirement per line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingForm {
    /// Job title.
    pub title: String,
    /// Free-form location.
    pub location: String,
    /// Free-text description.
    pub description: String,
    /// Newline-separated requirements.
    pub requirements: String,
    /// Salary range; blank means none.
    #[serde(default)]
    pub salary: String,
    /// Employment type.
    #[serde(default = "default_job_type", rename = "type")]
    pub job_type: String,
}

fn default_job_type() -> String {
    DEFAULT_JOB_TYPE.to_owned()
}

impl PostingForm {
    /// Parse the form into posting fields, filling the company from the
    /// employer's profile or [`FALLBACK_COMPANY`].
    ///
    /// # Errors
    ///
    /// Returns [`PostingValidationError::NoRequirements`] when no non-blank
    /// requirement line remains.
    ///
    /// # Examples
    /// ```
    /// use jobboard::domain::PostingForm;
    ///
    /// let form = PostingForm {
    ///     title: "Rust Engineer".to_owned(),
    ///     location: "Remote".to_owned(),
    ///     description: "Systems work".to_owned(),
    ///     requirements: "Rust\n\n  Tokio  \n".to_owned(),
    ///     salary: String::new(),
    ///     job_type: "Contract".to_owned(),
    /// };
    /// let posting = form.into_posting(Some("Ferris Ltd")).expect("valid form");
    /// assert_eq!(posting.requirements, ["Rust", "Tokio"]);
    /// assert!(posting.salary.is_none());
    /// ```
    pub fn into_posting(
        self,
        company: Option<&str>,
    ) -> Result<NewJobPosting, PostingValidationError> {
        let requirements = parse_requirements(&self.requirements)?;
        let company = company
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_COMPANY)
            .to_owned();
        let salary = Some(self.salary).filter(|salary| !salary.trim().is_empty());
        Ok(NewJobPosting {
            title: self.title,
            company,
            location: self.location,
            description: self.description,
            requirements,
            salary,
            job_type: Some(self.job_type),
        })
    }
}

/// Split newline-separated requirements, trimming each line and dropping
/// blanks.
///
/// # Errors
///
/// Returns [`PostingValidationError::NoRequirements`] if nothing remains.
pub fn parse_requirements(text: &str) -> Result<Vec<String>, PostingValidationError> {
    let requirements: Vec<String> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    if requirements.is_empty() {
        return Err(PostingValidationError::NoRequirements);
    }
    Ok(requirements)
}

/// Postings matching a free-text search term, in their original order.
///
/// A blank term matches everything. Otherwise the trimmed term is compared
/// case-insensitively as a substring.
pub fn search_postings<'a>(
    postings: impl IntoIterator<Item = &'a JobPosting>,
    term: &str,
) -> Vec<JobPosting> {
    let term = term.trim().to_lowercase();
    postings
        .into_iter()
        .filter(|posting| term.is_empty() || posting.mentions(&term))
        .cloned()
        .collect()
}
