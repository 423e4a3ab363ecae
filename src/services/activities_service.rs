use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::database::ActivitiesRepo;
use crate::models::Activity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Participant not found")]
    ParticipantNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    Added,
    AlreadyRegistered,
}

pub fn list_activities(repo: &ActivitiesRepo) -> BTreeMap<String, Activity> {
    repo.list_activities()
}

/// Adds `email` to the activity. Signing up twice is a no-op, not an error.
/// `max_participants` is not checked.
pub fn signup(
    repo: &ActivitiesRepo,
    activity_name: &str,
    email: &str,
) -> Result<SignupOutcome, ActivityError> {
    let outcome = repo.update_activity(activity_name, |activity| {
        if activity.has_participant(email) {
            return SignupOutcome::AlreadyRegistered;
        }
        activity.participants.push(email.to_string());
        SignupOutcome::Added
    });

    match outcome {
        Some(outcome) => {
            info!(activity = %activity_name, email = %email, ?outcome, "signup");
            Ok(outcome)
        }
        None => {
            warn!(activity = %activity_name, email = %email, "signup for unknown activity");
            Err(ActivityError::ActivityNotFound)
        }
    }
}

pub fn unregister(
    repo: &ActivitiesRepo,
    activity_name: &str,
    email: &str,
) -> Result<(), ActivityError> {
    let removed = repo
        .update_activity(activity_name, |activity| {
            let Some(pos) = activity.participants.iter().position(|p| p == email) else {
                return Err(ActivityError::ParticipantNotFound);
            };
            activity.participants.remove(pos);
            Ok(())
        })
        .unwrap_or(Err(ActivityError::ActivityNotFound));

    match removed {
        Ok(()) => info!(activity = %activity_name, email = %email, "unregister"),
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected")
        }
    }
    removed
}

pub fn signup_message(email: &str, activity_name: &str) -> String {
    format!("Signed up {} for {}", email, activity_name)
}

pub fn unregister_message(email: &str, activity_name: &str) -> String {
    format!("Unregistered {} from {}", email, activity_name)
}
