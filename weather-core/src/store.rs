use std::fmt::Debug;

use async_trait::async_trait;

use crate::model::{CurrentConditions, WeatherRecord};

pub mod memory;
pub mod mongo;

/// Document collection of weather records, keyed loosely by location string.
///
/// Update and delete are bulk: they affect every record whose location
/// matches the filter, and report how many they touched. There is no
/// transactional guarantee across insert-then-read.
#[async_trait]
pub trait RecordStore: Send + Sync + Debug {
    /// Append a record to the collection.
    async fn insert(&self, record: &WeatherRecord) -> anyhow::Result<()>;

    /// Return every stored record. Internal store identifiers are never
    /// part of the returned records.
    async fn scan(&self) -> anyhow::Result<Vec<WeatherRecord>>;

    /// Replace `location` and `current` on all records matching
    /// `old_location`. Returns the number of modified records.
    async fn update_location(
        &self,
        old_location: &str,
        new_location: &str,
        current: &CurrentConditions,
    ) -> anyhow::Result<u64>;

    /// Delete all records matching `location`. Returns the number deleted.
    async fn delete_location(&self, location: &str) -> anyhow::Result<u64>;
}
