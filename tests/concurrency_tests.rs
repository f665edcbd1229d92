use std::collections::HashSet;
use std::path::Path;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use lastmile::api::{router, AppState};
use lastmile::registry::JobStatus;

async fn post(app: Router, uri: String, body: Option<Value>) -> Value {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_ids() {
    let state = AppState::seeded();
    let app = router(state.clone(), Path::new("static"));

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let job = post(
                    app,
                    "/jobs".to_string(),
                    Some(json!({
                        "pickup_location": format!("Dock {}", i),
                        "dropoff_location": "Bellevue",
                        "load_description": "Parcels",
                    })),
                )
                .await;
                job["id"].as_u64().unwrap()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()));
    }

    let expected: HashSet<u64> = (3..53).collect();
    assert_eq!(ids, expected);
    assert_eq!(state.jobs.read().await.len(), 52);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_driver_registrations_get_distinct_ids() {
    let state = AppState::seeded();
    let app = router(state.clone(), Path::new("static"));

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let driver = post(
                    app,
                    "/drivers".to_string(),
                    Some(json!({ "name": format!("Driver {}", i) })),
                )
                .await;
                driver["id"].as_u64().unwrap()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 20);
    assert_eq!(state.drivers.read().await.len(), 22);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_assignments_leave_consistent_job() {
    let state = AppState::seeded();
    let app = router(state.clone(), Path::new("static"));

    let handles: Vec<_> = (1..=10u64)
        .map(|driver_id| {
            let app = app.clone();
            tokio::spawn(async move { post(app, format!("/assign/1/{}", driver_id), None).await })
        })
        .collect();

    for handle in handles {
        let response = handle.await.unwrap();
        assert_eq!(response["job"]["status"], "assigned");
    }

    let jobs = state.jobs.read().await;
    let job = jobs.get_job(1).unwrap();
    assert_eq!(job.status, JobStatus::Assigned);
    let driver_id = job.driver_id.unwrap();
    assert!((1..=10).contains(&driver_id));

    // The untouched seed job is unaffected.
    assert_eq!(jobs.get_job(2).unwrap().status, JobStatus::Available);
}
