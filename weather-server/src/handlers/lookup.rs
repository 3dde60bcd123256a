//! Best-effort lookup handlers. These never surface an error status: a
//! missing query or an upstream failure yields an empty list with 200.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::warn;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

/// Related travel videos for a city.
///
/// GET /youtube?city=
pub async fn related_videos(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Json<Vec<serde_json::Value>> {
    let Some(city) = query.city.filter(|city| !city.trim().is_empty()) else {
        return Json(Vec::new());
    };

    match state.videos.search(&city).await {
        Ok(items) => Json(items),
        Err(e) => {
            warn!(error = %e, %city, "video lookup failed");
            Json(Vec::new())
        }
    }
}

/// City-name autocomplete.
///
/// GET /autocomplete?city=
pub async fn city_autocomplete(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Json<Vec<String>> {
    let Some(city) = query.city.filter(|city| !city.trim().is_empty()) else {
        return Json(Vec::new());
    };

    match state.cities.suggest(&city).await {
        Ok(names) => Json(names),
        Err(e) => {
            warn!(error = %e, %city, "city suggest failed");
            Json(Vec::new())
        }
    }
}
