//! SQLite storage implementation for weather records.

mod model;
mod repository;

pub use model::{NewWeatherRecordDB, WeatherPatchDB, WeatherRecordDB};
pub use repository::WeatherRepository;
