//! HTTP surface of the logistics service.
//!
//! Routes JSON requests to the job and driver registries and serves the
//! dashboards from the configured static directory. CORS admits every origin,
//! method and header, credentials included.

mod drivers;
mod extract;
mod jobs;
pub mod pages;

use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::registry::{DriverRegistry, JobRegistry};

pub use extract::{ApiJson, ApiPath};

pub const WELCOME_MESSAGE: &str = "Last-Mile Logistics API is live!";

/// Shared handler state. Each registry has its own lock so job updates never
/// wait on driver registration and vice versa.
#[derive(Clone, Default)]
pub struct AppState {
    pub jobs: Arc<RwLock<JobRegistry>>,
    pub drivers: Arc<RwLock<DriverRegistry>>,
}

impl AppState {
    pub fn new(jobs: JobRegistry, drivers: DriverRegistry) -> Self {
        Self {
            jobs: Arc::new(RwLock::new(jobs)),
            drivers: Arc::new(RwLock::new(drivers)),
        }
    }

    /// State populated with the startup jobs and drivers.
    pub fn seeded() -> Self {
        Self::new(JobRegistry::seeded(), DriverRegistry::seeded())
    }
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

/// Build the full application router.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    // Credentialed requests cannot use `*`, so the request's own values are echoed.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(index_handler))
        .route(
            "/jobs",
            get(jobs::list_jobs_handler).post(jobs::create_job_handler),
        )
        .route("/assign/:job_id/:driver_id", post(jobs::assign_driver_handler))
        .route("/complete/:job_id", post(jobs::complete_job_handler))
        .route(
            "/drivers",
            get(drivers::list_drivers_handler).post(drivers::create_driver_handler),
        )
        .merge(pages::routes(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind to the configured address and serve until `shutdown` is cancelled.
pub async fn run_server(
    config: ServerConfig,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<()> {
    let app = router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "Failed to bind HTTP server");
            return Err(e.into());
        }
    };

    tracing::info!(
        addr = %config.listen_addr,
        static_dir = %config.static_dir.display(),
        "Starting HTTP server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn index_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE,
    })
}
