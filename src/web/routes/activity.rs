use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Serialize;

use crate::database::ActivitiesRepo;
use crate::services::activities_service;
use crate::web::error::ApiError;

// Raw pairs so a repeated `email` resolves to its last value instead of failing.
type QueryPairs = Query<Vec<(String, String)>>;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParticipantQuery {
    pub email: Option<String>,
}

impl ParticipantQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let email = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last();
        Self { email }
    }

    // The email is kept exactly as decoded; only a missing key is rejected.
    fn require_email(self) -> Result<String, ApiError> {
        self.email.ok_or(ApiError::MissingParameter("email"))
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn participant_email(query: Result<QueryPairs, QueryRejection>) -> Result<String, ApiError> {
    let Query(pairs) = query?;
    ParticipantQuery::from_pairs(pairs).require_email()
}

pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    State(repo): State<ActivitiesRepo>,
    query: Result<QueryPairs, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let email = participant_email(query)?;
    activities_service::signup(&repo, &activity_name, &email)?;
    Ok(Json(MessageResponse {
        message: activities_service::signup_message(&email, &activity_name),
    }))
}

pub async fn activity_unregister_handler(
    path: Result<Path<String>, PathRejection>,
    State(repo): State<ActivitiesRepo>,
    query: Result<QueryPairs, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let email = participant_email(query)?;
    activities_service::unregister(&repo, &activity_name, &email)?;
    Ok(Json(MessageResponse {
        message: activities_service::unregister_message(&email, &activity_name),
    }))
}
