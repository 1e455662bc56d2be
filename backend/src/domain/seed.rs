//! Demonstration postings seeded into an empty board.

use chrono::{DateTime, Utc};
use demo_data::{DemoCatalogue, DemoPosting};
use tracing::error;

use super::{JobId, JobPosting, NewJobPosting, UserId};

/// The bundled demonstration postings, all stamped with `created_at`.
///
/// An invalid bundled catalogue is logged and yields no postings.
pub fn demo_postings(created_at: DateTime<Utc>) -> Vec<JobPosting> {
    match DemoCatalogue::bundled() {
        Ok(catalogue) => catalogue
            .postings()
            .iter()
            .map(|posting| posting_from_demo(posting, created_at))
            .collect(),
        Err(err) => {
            error!(error = %err, "bundled demo catalogue is invalid; seeding no postings");
            Vec::new()
        }
    }
}

fn posting_from_demo(posting: &DemoPosting, created_at: DateTime<Utc>) -> JobPosting {
    JobPosting::create(
        JobId::new(posting.id.as_str()),
        UserId::new(posting.employer_id.as_str()),
        created_at,
        NewJobPosting {
            title: posting.title.clone(),
            company: posting.company.clone(),
            location: posting.location.clone(),
            description: posting.description.clone(),
            requirements: posting.requirements.clone(),
            salary: posting.salary.clone(),
            job_type: posting.job_type.clone(),
        },
    )
}
