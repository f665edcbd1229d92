use axum::{extract::State, Json};

use crate::api::{ApiJson, AppState};
use crate::registry::{Driver, NewDriver};

pub(crate) async fn list_drivers_handler(State(state): State<AppState>) -> Json<Vec<Driver>> {
    let drivers = state.drivers.read().await;
    Json(drivers.list_drivers().to_vec())
}

pub(crate) async fn create_driver_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewDriver>,
) -> Json<Driver> {
    let driver = state.drivers.write().await.create_driver(payload).clone();

    tracing::info!(
        driver_id = driver.id,
        name = %driver.name,
        location = %driver.current_location,
        "Driver registered"
    );

    Json(driver)
}
