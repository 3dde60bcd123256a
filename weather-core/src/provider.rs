use std::fmt::Debug;

use async_trait::async_trait;

use crate::model::{CurrentConditions, ForecastDay};

pub mod openweather;

/// Seam over the upstream weather API.
///
/// Both calls return `Err` on any network, status, parse, or missing-field
/// failure; callers decide the externally visible behavior.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch normalized current conditions for a free-text location.
    async fn current_conditions(&self, location: &str) -> anyhow::Result<CurrentConditions>;

    /// Fetch the short-term forecast, one entry per day.
    async fn forecast(&self, location: &str) -> anyhow::Result<Vec<ForecastDay>>;
}
