use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::database::ActivitiesRepo;
use crate::models::Activity;
use crate::services::activities_service;

pub async fn activities_handler(
    State(repo): State<ActivitiesRepo>,
) -> Json<BTreeMap<String, Activity>> {
    Json(activities_service::list_activities(&repo))
}
