use crate::errors::Result;
use crate::weather::weather_model::{NewWeatherRecord, WeatherPatch, WeatherRecord};
use async_trait::async_trait;

/// Trait for weather repository operations
#[async_trait]
pub trait WeatherRepositoryTrait: Send + Sync {
    fn load_weather(&self, date_filter: Option<&str>) -> Result<Vec<WeatherRecord>>;
    async fn insert_weather(&self, new_record: NewWeatherRecord) -> Result<WeatherRecord>;
    async fn update_weather(&self, record_id: i32, patch: WeatherPatch) -> Result<WeatherRecord>;
    async fn delete_weather(&self, record_id: i32) -> Result<usize>;
}

/// Trait for weather service operations
#[async_trait]
pub trait WeatherServiceTrait: Send + Sync {
    fn get_weather(&self, date_filter: Option<&str>) -> Result<Vec<WeatherRecord>>;
    async fn create_weather(&self, new_record: NewWeatherRecord) -> Result<WeatherRecord>;
    async fn update_weather(&self, record_id: i32, patch: WeatherPatch) -> Result<WeatherRecord>;
    async fn delete_weather(&self, record_id: i32) -> Result<usize>;
}
