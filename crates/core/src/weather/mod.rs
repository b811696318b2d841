//! Weather module - domain models, services, and traits.

mod weather_model;
mod weather_service;
mod weather_traits;

// Re-export the public interface
pub use weather_model::{NewWeatherRecord, WeatherPatch, WeatherRecord};
pub use weather_service::WeatherService;
pub use weather_traits::{WeatherRepositoryTrait, WeatherServiceTrait};
