use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::{CurrentConditions, WeatherRecord};

use super::RecordStore;

/// In-memory record store with the same observable semantics as the
/// MongoDB implementation. Used by server tests and local runs without
/// a database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<WeatherRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, record: &WeatherRecord) -> Result<()> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<WeatherRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn update_location(
        &self,
        old_location: &str,
        new_location: &str,
        current: &CurrentConditions,
    ) -> Result<u64> {
        let mut records = self.records.write().await;
        let mut modified = 0;

        for record in records.iter_mut() {
            if record.location == old_location {
                record.location = new_location.to_string();
                record.current = current.clone();
                modified += 1;
            }
        }

        Ok(modified)
    }

    async fn delete_location(&self, location: &str) -> Result<u64> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| record.location != location);

        Ok((before - records.len()) as u64)
    }
}
