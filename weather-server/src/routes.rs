//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Landing page
        .route("/", get(handlers::index::landing_page))
        // Weather records
        .route("/weather", post(handlers::weather::create_weather))
        .route("/read", get(handlers::weather::read_records))
        .route("/update", post(handlers::weather::update_location))
        .route("/delete", post(handlers::weather::delete_location))
        // Best-effort lookups
        .route("/youtube", get(handlers::lookup::related_videos))
        .route("/autocomplete", get(handlers::lookup::city_autocomplete))
        // Exports
        .route("/export/json", get(handlers::export::export_json))
        .route("/export/csv", get(handlers::export::export_csv))
        // Attach state
        .with_state(state)
}
