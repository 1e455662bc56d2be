//! Structural checks applied to a parsed catalogue.

use std::collections::HashSet;

use crate::error::CatalogueError;
use crate::records::{DemoAccount, DemoPosting};

pub(crate) fn validate_postings(postings: &[DemoPosting]) -> Result<(), CatalogueError> {
    let mut seen = HashSet::new();
    for posting in postings {
        if !seen.insert(posting.id.as_str()) {
            return Err(CatalogueError::DuplicatePostingId {
                id: posting.id.clone(),
            });
        }
        if posting.requirements.iter().all(|req| req.trim().is_empty()) {
            return Err(CatalogueError::EmptyRequirements {
                id: posting.id.clone(),
            });
        }
    }
    Ok(())
}

pub(crate) fn validate_accounts(accounts: &[DemoAccount]) -> Result<(), CatalogueError> {
    let mut seen = HashSet::new();
    for account in accounts {
        if !seen.insert((account.email.as_str(), account.role)) {
            return Err(CatalogueError::DuplicateAccount {
                email: account.email.clone(),
                role: account.role.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Unit tests for catalogue validation.

    use super::*;
    use crate::records::AccountRole;
    use rstest::rstest;

    fn posting(id: &str, requirements: &[&str]) -> DemoPosting {
        DemoPosting {
            id: id.to_owned(),
            title: "Title".to_owned(),
            company: "Company".to_owned(),
            location: "Remote".to_owned(),
            description: "Description".to_owned(),
            requirements: requirements.iter().map(|r| (*r).to_owned()).collect(),
            employer_id: "emp1".to_owned(),
            salary: None,
            job_type: None,
        }
    }

    fn account(email: &str, role: AccountRole) -> DemoAccount {
        DemoAccount {
            id: "id".to_owned(),
            name: "Name".to_owned(),
            email: email.to_owned(),
            password: "password".to_owned(),
            role,
            company: None,
            has_resume: None,
        }
    }

    #[rstest]
    fn duplicate_posting_ids_are_rejected() {
        let err = validate_postings(&[posting("1", &["Rust"]), posting("1", &["Go"])])
            .expect_err("duplicates rejected");
        assert_eq!(err, CatalogueError::DuplicatePostingId { id: "1".to_owned() });
    }

    #[rstest]
    #[case(&[])]
    #[case(&["  ", ""])]
    fn blank_requirements_are_rejected(#[case] requirements: &[&str]) {
        let err = validate_postings(&[posting("7", requirements)]).expect_err("blank rejected");
        assert_eq!(err, CatalogueError::EmptyRequirements { id: "7".to_owned() });
    }

    #[rstest]
    fn same_email_is_allowed_across_roles() {
        let accounts = [
            account("a@example.com", AccountRole::Employer),
            account("a@example.com", AccountRole::Jobseeker),
        ];
        assert!(validate_accounts(&accounts).is_ok());
    }

    #[rstest]
    fn same_email_within_role_is_rejected() {
        let accounts = [
            account("a@example.com", AccountRole::Employer),
            account("a@example.com", AccountRole::Employer),
        ];
        let err = validate_accounts(&accounts).expect_err("duplicate rejected");
        assert_eq!(
            err,
            CatalogueError::DuplicateAccount {
                email: "a@example.com".to_owned(),
                role: "employer".to_owned(),
            }
        );
    }
}
