//! Application state shared across handlers

use std::sync::Arc;

use weather_core::{CityLookup, RecordStore, VideoLookup, WeatherProvider};

/// Shared application state, constructed once at startup and cloned per
/// request. Lifecycle of the store connection = process start to shutdown.
#[derive(Clone)]
pub struct AppState {
    /// Record store for weather snapshots
    pub store: Arc<dyn RecordStore>,
    /// Upstream weather API client
    pub provider: Arc<dyn WeatherProvider>,
    /// City autocomplete client
    pub cities: CityLookup,
    /// Related-video search client
    pub videos: VideoLookup,
    /// Maps embed key for the landing page
    pub google_maps_key: String,
}
