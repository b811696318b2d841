use std::sync::Arc;

use super::weather_model::{NewWeatherRecord, WeatherPatch, WeatherRecord};
use super::weather_traits::{WeatherRepositoryTrait, WeatherServiceTrait};
use crate::errors::{Result, ValidationError};

/// Service for managing weather records.
pub struct WeatherService {
    repository: Arc<dyn WeatherRepositoryTrait>,
}

impl WeatherService {
    /// Creates a new WeatherService instance
    pub fn new(repository: Arc<dyn WeatherRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl WeatherServiceTrait for WeatherService {
    /// Lists weather records, optionally filtered by date
    fn get_weather(&self, date_filter: Option<&str>) -> Result<Vec<WeatherRecord>> {
        self.repository.load_weather(date_filter)
    }

    /// Records a weather observation after checking the required fields
    async fn create_weather(&self, new_record: NewWeatherRecord) -> Result<WeatherRecord> {
        if new_record.date.is_empty() {
            return Err(ValidationError::MissingFields("Date is required".to_string()).into());
        }
        self.repository.insert_weather(new_record).await
    }

    /// Applies a partial update and returns the merged record
    async fn update_weather(&self, record_id: i32, patch: WeatherPatch) -> Result<WeatherRecord> {
        self.repository.update_weather(record_id, patch).await
    }

    /// Deletes a weather record by id
    async fn delete_weather(&self, record_id: i32) -> Result<usize> {
        self.repository.delete_weather(record_id).await
    }
}
