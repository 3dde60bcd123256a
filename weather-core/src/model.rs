use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for a location, normalized from the upstream payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub lat: f64,
    pub lon: f64,
    pub icon: String,
}

/// One forecast sample per day, downsampled from the 3-hour feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub temp: f64,
    pub desc: String,
}

/// A stored weather snapshot. Only built when both the current conditions
/// and the forecast were fetched successfully.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub location: String,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
    pub timestamp: DateTime<Utc>,
    pub lat: f64,
    pub lon: f64,
}

impl WeatherRecord {
    /// Assemble a record for `location` from freshly fetched data,
    /// stamped with the current time.
    pub fn new(
        location: impl Into<String>,
        current: CurrentConditions,
        forecast: Vec<ForecastDay>,
    ) -> Self {
        let lat = current.lat;
        let lon = current.lon;

        Self {
            location: location.into(),
            current,
            forecast,
            timestamp: Utc::now(),
            lat,
            lon,
        }
    }
}
