use std::sync::Arc;

use tracing::{info, warn};

use crate::database::activities_repo::ActivitiesRepo;
use crate::error::SignupError;
use crate::models::ActivityCatalog;

/// The activity directory: lists activities and manages their rosters.
///
/// Cloning is cheap and every clone shares the same store, so one instance is
/// handed to the router as state.
#[derive(Clone)]
pub struct ActivityDirectory {
    repo: Arc<ActivitiesRepo>,
}

impl ActivityDirectory {
    pub fn new(repo: ActivitiesRepo) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    pub fn list(&self) -> ActivityCatalog {
        self.repo.list()
    }

    /// Signs `email` up for `activity_name` and returns the confirmation message.
    pub fn sign_up(&self, activity_name: &str, email: &str) -> Result<String, SignupError> {
        require_email(email)?;

        if let Err(e) = self.repo.add_participant(activity_name, email) {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            return Err(e);
        }

        info!(activity = %activity_name, email = %email, "participant signed up");
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Removes `email` from `activity_name` and returns the confirmation message.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<String, SignupError> {
        require_email(email)?;

        if let Err(e) = self.repo.remove_participant(activity_name, email) {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            return Err(e);
        }

        info!(activity = %activity_name, email = %email, "participant unregistered");
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}

fn require_email(email: &str) -> Result<(), SignupError> {
    if email.trim().is_empty() {
        return Err(SignupError::MissingEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> ActivityDirectory {
        ActivityDirectory::new(ActivitiesRepo::seeded().unwrap())
    }

    fn roster(directory: &ActivityDirectory, name: &str) -> Vec<String> {
        directory.list().get(name).unwrap().participants.clone()
    }

    #[test]
    fn sign_up_then_list_shows_email_once() {
        let directory = directory();
        let message = directory.sign_up("Chess Club", "a@example.com").unwrap();

        assert_eq!(message, "Signed up a@example.com for Chess Club");
        let roster = roster(&directory, "Chess Club");
        assert_eq!(roster.iter().filter(|p| *p == "a@example.com").count(), 1);
    }

    #[test]
    fn second_sign_up_is_rejected() {
        let directory = directory();
        directory.sign_up("Chess Club", "a@example.com").unwrap();
        let before = roster(&directory, "Chess Club").len();

        assert_eq!(
            directory.sign_up("Chess Club", "a@example.com"),
            Err(SignupError::AlreadyRegistered)
        );
        assert_eq!(roster(&directory, "Chess Club").len(), before);
    }

    #[test]
    fn sign_up_then_unregister_removes_email() {
        let directory = directory();
        directory.sign_up("Drama Club", "a@example.com").unwrap();

        let message = directory.unregister("Drama Club", "a@example.com").unwrap();
        assert!(message.contains("Unregistered"));
        assert!(message.contains("a@example.com"));
        assert!(!roster(&directory, "Drama Club").contains(&"a@example.com".to_string()));
    }

    #[test]
    fn unregister_absent_email() {
        assert_eq!(
            directory().unregister("Chess Club", "nobody@example.com"),
            Err(SignupError::NotRegistered)
        );
    }

    #[test]
    fn unknown_activity() {
        let directory = directory();
        assert_eq!(
            directory.sign_up("Underwater Basket Weaving", "a@example.com"),
            Err(SignupError::NotFound)
        );
        assert_eq!(
            directory.unregister("Underwater Basket Weaving", "a@example.com"),
            Err(SignupError::NotFound)
        );
    }

    #[test]
    fn fills_up_to_capacity() {
        let directory = directory();
        let math = directory.list().get("Math Club").unwrap().clone();

        for i in 0..math.spots_left() {
            directory
                .sign_up("Math Club", &format!("student{i}@example.com"))
                .unwrap();
        }

        assert_eq!(
            directory.sign_up("Math Club", "late@example.com"),
            Err(SignupError::CapacityExceeded)
        );
        assert!(directory.list().get("Math Club").unwrap().is_full());
    }

    #[test]
    fn blank_email_is_rejected_before_lookup() {
        let directory = directory();
        assert_eq!(directory.sign_up("Nope", ""), Err(SignupError::MissingEmail));
        assert_eq!(
            directory.unregister("Chess Club", "   "),
            Err(SignupError::MissingEmail)
        );
    }

    #[test]
    fn clones_share_state() {
        let directory = directory();
        let other = directory.clone();
        other.sign_up("Art Club", "shared@example.com").unwrap();

        assert!(roster(&directory, "Art Club").contains(&"shared@example.com".to_string()));
    }

    #[test]
    fn separate_instances_are_isolated() {
        let first = directory();
        let second = directory();
        first.sign_up("Art Club", "only-first@example.com").unwrap();

        assert!(!roster(&second, "Art Club").contains(&"only-first@example.com".to_string()));
    }
}
