//! Core library for the weather backend.
//!
//! This crate defines:
//! - Configuration loaded from the environment
//! - Abstraction over the upstream weather API
//! - The record store (MongoDB, plus an in-memory implementation)
//! - Best-effort auxiliary lookup clients (city suggest, video search)
//!
//! It is used by `weather-server`, but can also be reused by other binaries.

pub mod config;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod store;

pub use config::AppConfig;
pub use lookup::{CityLookup, VideoLookup};
pub use model::{CurrentConditions, ForecastDay, WeatherRecord};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use store::{RecordStore, memory::MemoryStore, mongo::MongoStore};
