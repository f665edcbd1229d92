use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::AppState;

pub const SHIPPER_DASHBOARD: &str = "shipper_dashboard.html";
pub const ADMIN_DASHBOARD: &str = "admin_dashboard.html";

/// Dashboard pages and the `/static` tree, read from disk on every request.
pub fn routes(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/shipper", ServeFile::new(static_dir.join(SHIPPER_DASHBOARD)))
        .route_service("/admin", ServeFile::new(static_dir.join(ADMIN_DASHBOARD)))
        .nest_service(
            "/static",
            ServeDir::new(static_dir).append_index_html_on_directories(false),
        )
}
