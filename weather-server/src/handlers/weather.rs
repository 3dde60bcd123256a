//! Weather record handlers: create, list, bulk update, bulk delete.

use axum::{Form, Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use weather_core::WeatherRecord;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct CreateWeatherRequest {
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLocationRequest {
    pub old_location: Option<String>,
    pub new_location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteLocationRequest {
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub message: &'static str,
    pub modified: u64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub count: u64,
}

/// Fetch current conditions and forecast for a location, persist the
/// snapshot, and return it. Nothing is stored unless both fetches succeed.
///
/// POST /weather
pub async fn create_weather(
    State(state): State<AppState>,
    Form(request): Form<CreateWeatherRequest>,
) -> Result<Json<WeatherRecord>, ApiError> {
    let location = request
        .location
        .filter(|location| !location.trim().is_empty())
        .ok_or_else(|| ApiError::MissingInput("No location provided".to_string()))?;

    info!(%location, "creating weather record");

    let current = state
        .provider
        .current_conditions(&location)
        .await
        .map_err(|e| {
            warn!(error = %e, %location, "current weather fetch failed");
            ApiError::UpstreamFailed
        })?;

    let forecast = state.provider.forecast(&location).await.map_err(|e| {
        warn!(error = %e, %location, "forecast fetch failed");
        ApiError::UpstreamFailed
    })?;

    let record = WeatherRecord::new(&location, current, forecast);
    state.store.insert(&record).await?;

    Ok(Json(record))
}

/// Return all stored records.
///
/// GET /read
pub async fn read_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeatherRecord>>, ApiError> {
    let records = state.store.scan().await?;
    Ok(Json(records))
}

/// Re-fetch current conditions for the new location, then replace
/// `location` and `current` on every record matching the old location.
///
/// POST /update
pub async fn update_location(
    State(state): State<AppState>,
    Form(request): Form<UpdateLocationRequest>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let old_location = request.old_location.unwrap_or_default();
    let new_location = request
        .new_location
        .filter(|location| !location.trim().is_empty())
        .ok_or(ApiError::InvalidLocation)?;

    let current = state
        .provider
        .current_conditions(&new_location)
        .await
        .map_err(|e| {
            warn!(error = %e, %new_location, "re-fetch for update failed");
            ApiError::InvalidLocation
        })?;

    let modified = state
        .store
        .update_location(&old_location, &new_location, &current)
        .await?;

    info!(%old_location, %new_location, modified, "updated weather records");

    Ok(Json(UpdateResponse {
        message: "Updated",
        modified,
    }))
}

/// Delete every record matching the given location.
///
/// POST /delete
pub async fn delete_location(
    State(state): State<AppState>,
    Form(request): Form<DeleteLocationRequest>,
) -> Result<Json<DeleteResponse>, ApiError> {
    // A missing field matches no records.
    let count = match request.location {
        Some(location) => state.store.delete_location(&location).await?,
        None => 0,
    };

    info!(count, "deleted weather records");

    Ok(Json(DeleteResponse {
        message: "Deleted",
        count,
    }))
}
