use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{doc, to_bson},
};

use crate::model::{CurrentConditions, WeatherRecord};

use super::RecordStore;

const DATABASE: &str = "weather_app";
const COLLECTION: &str = "weather_data";

/// MongoDB-backed record store.
///
/// The collection is typed as `WeatherRecord`, so the driver-generated
/// `_id` never round-trips into the exposed records.
#[derive(Debug, Clone)]
pub struct MongoStore {
    records: Collection<WeatherRecord>,
}

impl MongoStore {
    /// Connect using a MongoDB connection string.
    pub async fn connect(uri: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .context("Failed to connect to MongoDB")?;

        let records = client.database(DATABASE).collection(COLLECTION);
        Ok(Self { records })
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn insert(&self, record: &WeatherRecord) -> Result<()> {
        self.records
            .insert_one(record)
            .await
            .context("Failed to insert weather record")?;
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<WeatherRecord>> {
        let cursor = self
            .records
            .find(doc! {})
            .await
            .context("Failed to query weather records")?;

        cursor
            .try_collect()
            .await
            .context("Failed to read weather records from cursor")
    }

    async fn update_location(
        &self,
        old_location: &str,
        new_location: &str,
        current: &CurrentConditions,
    ) -> Result<u64> {
        let current = to_bson(current).context("Failed to serialize current conditions")?;

        let result = self
            .records
            .update_many(
                doc! { "location": old_location },
                doc! { "$set": { "location": new_location, "current": current } },
            )
            .await
            .context("Failed to update weather records")?;

        Ok(result.modified_count)
    }

    async fn delete_location(&self, location: &str) -> Result<u64> {
        let result = self
            .records
            .delete_many(doc! { "location": location })
            .await
            .context("Failed to delete weather records")?;

        Ok(result.deleted_count)
    }
}
