//! Best-effort auxiliary lookups: city-name autocomplete (GeoDB) and
//! related-video search (YouTube Data API).
//!
//! Both clients do a single outbound call and extract fields; no
//! normalization beyond that. Callers treat any `Err` as "no results".

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const GEODB_BASE_URL: &str = "https://wft-geo-db.p.rapidapi.com";
const GEODB_HOST: &str = "wft-geo-db.p.rapidapi.com";
const YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// GeoDB city-suggest client (RapidAPI header auth).
#[derive(Debug, Clone)]
pub struct CityLookup {
    api_key: String,
    base_url: String,
    http: Client,
}

impl CityLookup {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: GEODB_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Return up to five city names starting with `prefix`.
    pub async fn suggest(&self, prefix: &str) -> Result<Vec<String>> {
        let url = format!("{}/v1/geo/cities", self.base_url);
        debug!(%prefix, "fetching city suggestions");

        let res = self
            .http
            .get(&url)
            .query(&[("namePrefix", prefix), ("limit", "5")])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", GEODB_HOST)
            .send()
            .await
            .context("Failed to send request to GeoDB")?;

        let status = res.status();
        if !status.is_success() {
            return Err(anyhow!("GeoDB request failed with status {status}"));
        }

        let parsed: GeoDbResponse = res
            .json()
            .await
            .context("Failed to parse GeoDB JSON")?;

        Ok(parsed.data.into_iter().map(|city| city.name).collect())
    }
}

#[derive(Debug, Deserialize)]
struct GeoDbCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct GeoDbResponse {
    data: Vec<GeoDbCity>,
}

/// YouTube search client for travel-guide videos about a city.
#[derive(Debug, Clone)]
pub struct VideoLookup {
    api_key: String,
    base_url: String,
    http: Client,
}

impl VideoLookup {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: YOUTUBE_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Return up to three search result items for "{city} travel guide".
    /// Items are passed through as-is.
    pub async fn search(&self, city: &str) -> Result<Vec<serde_json::Value>> {
        let url = format!("{}/search", self.base_url);
        let query = format!("{city} travel guide");
        debug!(%city, "fetching related videos");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query.as_str()),
                ("type", "video"),
                ("key", self.api_key.as_str()),
                ("maxResults", "3"),
            ])
            .send()
            .await
            .context("Failed to send request to YouTube")?;

        let status = res.status();
        if !status.is_success() {
            return Err(anyhow!("YouTube request failed with status {status}"));
        }

        let parsed: YoutubeResponse = res
            .json()
            .await
            .context("Failed to parse YouTube JSON")?;

        Ok(parsed.items)
    }
}

#[derive(Debug, Deserialize)]
struct YoutubeResponse {
    items: Vec<serde_json::Value>,
}
