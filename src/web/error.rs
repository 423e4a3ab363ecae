use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::activities_service::ActivityError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Activity(#[from] ActivityError),
    #[error("Missing required query parameter: {0}")]
    MissingParameter(&'static str),
    // Extractor failures keep axum's status and message.
    #[error("{detail}")]
    BadRequest { status: StatusCode, detail: String },
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self {
            ApiError::Activity(_) => StatusCode::NOT_FOUND,
            ApiError::MissingParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest { status, .. } => *status,
        };
        (code, Json(ErrBody { detail: self.to_string() })).into_response()
    }
}
