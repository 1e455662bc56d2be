//! Navigation policy for role-gated pages.
//!
//! The stores perform no authorization. Callers that render pages consult
//! this module to decide whether a visitor may see a page, where to send
//! them otherwise, and whether they may apply to a posting.

use super::{User, UserRole};

/// Pages of the job board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page.
    Home,
    /// Sign-in form.
    Login,
    /// Sign-up form.
    Register,
    /// Posting search for job seekers.
    FindJobs,
    /// Single posting view.
    JobDetail,
    /// A job seeker's submitted applications.
    Applications,
    /// A job seeker's profile.
    Profile,
    /// Posting form for employers.
    PostJob,
    /// An employer's own postings.
    ManageJobs,
    /// An employer's profile.
    EmployerProfile,
}

impl Page {
    /// Route path for the page. [`Page::JobDetail`] is a template.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::FindJobs => "/find-jobs",
            Self::JobDetail => "/jobs/:id",
            Self::Applications => "/applications",
            Self::Profile => "/profile",
            Self::PostJob => "/post-job",
            Self::ManageJobs => "/manage-jobs",
            Self::EmployerProfile => "/employer-profile",
        }
    }

    /// Role a visitor needs, or `None` for public pages.
    pub fn required_role(self) -> Option<UserRole> {
        match self {
            Self::FindJobs | Self::Applications | Self::Profile => Some(UserRole::Jobseeker),
            Self::PostJob | Self::ManageJobs | Self::EmployerProfile => Some(UserRole::Employer),
            Self::Home | Self::Login | Self::Register | Self::JobDetail => None,
        }
    }

    /// Decide whether the current session may view this page.
    ///
    /// # Examples
    /// ```
    /// use jobboard::domain::{Access, Page};
    ///
    /// assert_eq!(Page::ManageJobs.access(None), Access::Redirect(Page::Login));
    /// assert_eq!(Page::Home.access(None), Access::Granted);
    /// ```
    pub fn access(self, session: Option<&User>) -> Access {
        let Some(required) = self.required_role() else {
            return Access::Granted;
        };
        match session {
            None => Access::Redirect(Page::Login),
            Some(user) if user.has_role(required) => Access::Granted,
            Some(_) => Access::Redirect(Page::Home),
        }
    }
}

/// Outcome of a page access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page may be rendered.
    Granted,
    /// Send the visitor to another page instead.
    Redirect(Page),
}

/// Page shown after a successful login.
pub fn landing_after_login(role: UserRole) -> Page {
    match role {
        UserRole::Employer => Page::ManageJobs,
        UserRole::Jobseeker => Page::FindJobs,
    }
}

/// Page shown after a successful registration.
pub fn landing_after_register(role: UserRole) -> Page {
    match role {
        UserRole::Employer => Page::PostJob,
        UserRole::Jobseeker => Page::Profile,
    }
}

/// Whether the current session may apply to a posting from its detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyEligibility {
    /// A job seeker with a resume on file.
    Eligible,
    /// Nobody is signed in.
    LoginRequired,
    /// Signed in under a role other than job seeker.
    JobseekersOnly,
    /// A job seeker who must upload a resume first.
    ResumeRequired,
}

/// Evaluate [`ApplyEligibility`] for the current session.
///
/// This is the check the job board itself leaves to callers.
pub fn apply_eligibility(session: Option<&User>) -> ApplyEligibility {
    match session {
        None => ApplyEligibility::LoginRequired,
        Some(user) if !user.has_role(UserRole::Jobseeker) => ApplyEligibility::JobseekersOnly,
        Some(user) if !user.has_resume() => ApplyEligibility::ResumeRequired,
        Some(_) => ApplyEligibility::Eligible,
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::UserId;
    use rstest::rstest;

    fn user(role: Option<UserRole>) -> User {
        User::new(UserId::new("u1"), "Name", "name@example.com", role)
    }

    #[rstest]
    #[case(Page::FindJobs)]
    #[case(Page::Applications)]
    #[case(Page::Profile)]
    #[case(Page::PostJob)]
    #[case(Page::ManageJobs)]
    #[case(Page::EmployerProfile)]
    fn gated_pages_send_visitors_to_login(#[case] page: Page) {
        assert_eq!(page.access(None), Access::Redirect(Page::Login));
    }

    #[rstest]
    #[case(Page::FindJobs, UserRole::Employer)]
    #[case(Page::Applications, UserRole::Employer)]
    #[case(Page::Profile, UserRole::Employer)]
    #[case(Page::PostJob, UserRole::Jobseeker)]
    #[case(Page::ManageJobs, UserRole::Jobseeker)]
    #[case(Page::EmployerProfile, UserRole::Jobseeker)]
    fn wrong_role_is_sent_home(#[case] page: Page, #[case] role: UserRole) {
        let visitor = user(Some(role));
        assert_eq!(page.access(Some(&visitor)), Access::Redirect(Page::Home));
    }

    #[rstest]
    fn roleless_user_is_sent_home_from_gated_pages() {
        let visitor = user(None);
        assert_eq!(Page::FindJobs.access(Some(&visitor)), Access::Redirect(Page::Home));
    }

    #[rstest]
    #[case(Page::ManageJobs, UserRole::Employer)]
    #[case(Page::FindJobs, UserRole::Jobseeker)]
    #[case(Page::JobDetail, UserRole::Employer)]
    fn matching_role_is_granted(#[case] page: Page, #[case] role: UserRole) {
        let visitor = user(Some(role));
        assert_eq!(page.access(Some(&visitor)), Access::Granted);
    }

    #[rstest]
    #[case(UserRole::Employer, "/manage-jobs", "/post-job")]
    #[case(UserRole::Jobseeker, "/find-jobs", "/profile")]
    fn landing_pages_depend_on_role(
        #[case] role: UserRole,
        #[case] after_login: &str,
        #[case] after_register: &str,
    ) {
        assert_eq!(landing_after_login(role).path(), after_login);
        assert_eq!(landing_after_register(role).path(), after_register);
    }

    #[rstest]
    fn apply_eligibility_covers_each_gate() {
        assert_eq!(apply_eligibility(None), ApplyEligibility::LoginRequired);

        let employer = user(Some(UserRole::Employer));
        assert_eq!(
            apply_eligibility(Some(&employer)),
            ApplyEligibility::JobseekersOnly
        );

        let seeker = user(Some(UserRole::Jobseeker));
        assert_eq!(
            apply_eligibility(Some(&seeker)),
            ApplyEligibility::ResumeRequired
        );

        let ready = seeker.with_resume(true);
        assert_eq!(apply_eligibility(Some(&ready)), ApplyEligibility::Eligible);
    }
}
