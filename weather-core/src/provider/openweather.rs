use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{CurrentConditions, ForecastDay};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// One forecast sample per day out of the 3-hour feed (24h / 3h).
/// Assumes a fixed upstream cadence; not re-derived from timestamps.
const DEFAULT_FORECAST_STRIDE: usize = 8;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    forecast_stride: usize,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            forecast_stride: DEFAULT_FORECAST_STRIDE,
            http: Client::new(),
        }
    }

    /// Point the provider at a different API root, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the sampling stride over the 3-hour feed (minimum 1).
    pub fn with_forecast_stride(mut self, stride: usize) -> Self {
        self.forecast_stride = stride.max(1);
        self
    }

    async fn fetch_current(&self, location: &str) -> Result<CurrentConditions> {
        let url = format!("{}/weather", self.base_url);
        debug!(%location, "fetching current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        let weather = parsed
            .weather
            .first()
            .ok_or_else(|| anyhow!("OpenWeather current response contained no weather entry"))?;

        Ok(CurrentConditions {
            temperature: parsed.main.temp,
            description: weather.description.clone(),
            humidity: parsed.main.humidity,
            wind_speed: parsed.wind.speed,
            lat: parsed.coord.lat,
            lon: parsed.coord.lon,
            icon: weather.icon.clone(),
        })
    }

    async fn fetch_forecast(&self, location: &str) -> Result<Vec<ForecastDay>> {
        let url = format!("{}/forecast", self.base_url);
        debug!(%location, stride = self.forecast_stride, "fetching forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (5-day forecast)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OwForecastResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather forecast JSON")?;

        downsample_forecast(&parsed.list, self.forecast_stride)
    }
}

/// Reduce the flat 3-hour feed to one sample per day by taking
/// indices 0, stride, 2*stride, ...
fn downsample_forecast(entries: &[OwForecastEntry], stride: usize) -> Result<Vec<ForecastDay>> {
    entries
        .iter()
        .step_by(stride.max(1))
        .map(|entry| {
            let date = entry
                .dt_txt
                .split(' ')
                .next()
                .ok_or_else(|| anyhow!("OpenWeather forecast entry has empty dt_txt"))?
                .to_string();

            let weather = entry
                .weather
                .first()
                .ok_or_else(|| anyhow!("OpenWeather forecast entry contained no weather entry"))?;

            Ok(ForecastDay {
                date,
                temp: entry.main.temp,
                desc: weather.description.clone(),
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    coord: OwCoord,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_conditions(&self, location: &str) -> Result<CurrentConditions> {
        self.fetch_current(location).await
    }

    async fn forecast(&self, location: &str) -> Result<Vec<ForecastDay>> {
        self.fetch_forecast(location).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: u32, hour: u32, temp: f64) -> OwForecastEntry {
        OwForecastEntry {
            dt_txt: format!("2026-08-{day:02} {hour:02}:00:00"),
            main: OwMain { temp, humidity: 50 },
            weather: vec![OwWeather {
                description: "clear sky".to_string(),
                icon: "01d".to_string(),
            }],
        }
    }

    /// 40 entries at 3-hour cadence cover 5 days.
    fn three_hour_feed() -> Vec<OwForecastEntry> {
        (0..40u32)
            .map(|i| entry(1 + i / 8, (i % 8) * 3, 10.0 + f64::from(i)))
            .collect()
    }

    #[test]
    fn downsample_takes_every_eighth_entry() {
        let feed = three_hour_feed();
        let days = downsample_forecast(&feed, 8).expect("downsampling should succeed");

        assert_eq!(days.len(), 5);
        for (i, day) in days.iter().enumerate() {
            // index 0, 8, 16, 24, 32
            let source = &feed[i * 8];
            assert_eq!(day.date, source.dt_txt.split(' ').next().unwrap());
            assert!((day.temp - source.main.temp).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn downsample_stride_is_configurable() {
        let feed = three_hour_feed();

        let days = downsample_forecast(&feed, 4).expect("downsampling should succeed");
        assert_eq!(days.len(), 10);

        // Stride 0 is clamped rather than looping forever.
        let days = downsample_forecast(&feed, 0).expect("downsampling should succeed");
        assert_eq!(days.len(), 40);
    }

    #[test]
    fn downsample_empty_feed_is_empty() {
        let days = downsample_forecast(&[], 8).expect("downsampling should succeed");
        assert!(days.is_empty());
    }

    #[test]
    fn downsample_rejects_entry_without_weather() {
        let mut feed = three_hour_feed();
        feed[0].weather.clear();

        assert!(downsample_forecast(&feed, 8).is_err());
    }

    #[test]
    fn truncate_body_caps_long_payloads() {
        let long = "x".repeat(500);
        let out = truncate_body(&long);
        assert!(out.len() < 500);
        assert!(out.ends_with("..."));
    }
}
