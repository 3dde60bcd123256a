use anyhow::{Context, Result, anyhow};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Process configuration, populated once at startup from environment
/// variables and passed to the components that need credentials.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenWeather API key (`OPENWEATHER_API_KEY`).
    pub openweather_api_key: String,
    /// MongoDB connection string (`MONGO_URI`).
    pub mongo_uri: String,
    /// GeoDB / RapidAPI key for city autocomplete (`GEODB_API_KEY`).
    pub geodb_api_key: String,
    /// YouTube Data API key (`YOUTUBE_API_KEY`).
    pub youtube_api_key: String,
    /// Google Maps embed key for the landing page (`GOOGLE_MAPS_KEY`);
    /// the page degrades without it.
    pub google_maps_key: String,
    /// Bind address (`HOST`, default 0.0.0.0).
    pub host: String,
    /// Bind port (`PORT`, default 3000).
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration through an arbitrary variable lookup. Keeps
    /// tests from having to mutate the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| anyhow!("Missing required environment variable {name}"))
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            openweather_api_key: required("OPENWEATHER_API_KEY")?,
            mongo_uri: required("MONGO_URI")?,
            geodb_api_key: required("GEODB_API_KEY")?,
            youtube_api_key: required("YOUTUBE_API_KEY")?,
            google_maps_key: lookup("GOOGLE_MAPS_KEY").unwrap_or_default(),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }
}
