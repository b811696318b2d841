//! Crop domain models.

use serde::{Deserialize, Serialize};

/// A crop planted by one user. `sow_date` is free text, as entered in the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Crop {
    pub id: i32,
    pub user_id: i32,
    pub crop_name: String,
    pub area: Option<f64>,
    pub sow_date: Option<String>,
    pub fertilizer: Option<String>,
    pub expected_yield: Option<f64>,
}

/// Input model for recording a new crop.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewCrop {
    pub user_id: i32,
    pub crop_name: String,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub sow_date: Option<String>,
    #[serde(default)]
    pub fertilizer: Option<String>,
    #[serde(default)]
    pub expected_yield: Option<f64>,
}

/// Partial update for a crop; unknown keys are rejected at deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct CropPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sow_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fertilizer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_yield: Option<f64>,
}
