use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::{ApiJson, ApiPath, AppState};
use crate::error::Result;
use crate::registry::{Job, NewJob};

#[derive(Serialize)]
pub(crate) struct JobActionResponse {
    message: &'static str,
    job: Job,
}

pub(crate) async fn list_jobs_handler(State(state): State<AppState>) -> Json<Vec<Job>> {
    let jobs = state.jobs.read().await;
    Json(jobs.list_jobs().to_vec())
}

pub(crate) async fn create_job_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewJob>,
) -> Json<Job> {
    let job = state.jobs.write().await.create_job(payload).clone();

    tracing::info!(
        job_id = job.id,
        pickup = %job.pickup_location,
        dropoff = %job.dropoff_location,
        "Job created"
    );

    Json(job)
}

pub(crate) async fn assign_driver_handler(
    State(state): State<AppState>,
    ApiPath((job_id, driver_id)): ApiPath<(i64, i64)>,
) -> Result<Json<JobActionResponse>> {
    // Unregistered drivers are accepted; the lookup only feeds the log line.
    let known_driver = state.drivers.read().await.get_driver(driver_id).is_some();

    let job = match state.jobs.write().await.assign_driver(job_id, driver_id) {
        Ok(job) => job.clone(),
        Err(e) => {
            tracing::warn!(job_id, driver_id, "Cannot assign driver: job not found");
            return Err(e);
        }
    };

    tracing::info!(job_id, driver_id, known_driver, "Driver assigned");

    Ok(Json(JobActionResponse {
        message: "Driver assigned",
        job,
    }))
}

pub(crate) async fn complete_job_handler(
    State(state): State<AppState>,
    ApiPath(job_id): ApiPath<i64>,
) -> Result<Json<JobActionResponse>> {
    let job = match state.jobs.write().await.complete_job(job_id) {
        Ok(job) => job.clone(),
        Err(e) => {
            tracing::warn!(job_id, "Cannot complete job: job not found");
            return Err(e);
        }
    };

    tracing::info!(job_id, driver_id = ?job.driver_id, "Job completed");

    Ok(Json(JobActionResponse {
        message: "Job completed",
        job,
    }))
}
