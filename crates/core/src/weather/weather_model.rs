//! Weather domain models.
//!
//! Temperature, rainfall, and humidity are free text as entered in the UI;
//! the portal never computes on them.

use serde::{Deserialize, Serialize};

/// A weather observation for one date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherRecord {
    pub id: i32,
    pub date: String,
    pub temperature: Option<String>,
    pub rainfall: Option<String>,
    pub humidity: Option<String>,
}

/// Input model for recording a weather observation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewWeatherRecord {
    pub date: String,
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub rainfall: Option<String>,
    #[serde(default)]
    pub humidity: Option<String>,
}

/// Partial update for a weather record; unknown keys are rejected at
/// deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct WeatherPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<String>,
}
