//! Database models for weather records.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for weather records
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::weather)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WeatherRecordDB {
    pub id: i32,
    pub date: String,
    pub temperature: Option<String>,
    pub rainfall: Option<String>,
    pub humidity: Option<String>,
}

/// Database model for recording a weather observation
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::weather)]
pub struct NewWeatherRecordDB {
    pub date: String,
    pub temperature: Option<String>,
    pub rainfall: Option<String>,
    pub humidity: Option<String>,
}

/// Changeset for partial weather updates; `None` fields are left untouched
#[derive(AsChangeset, Serialize, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::weather)]
pub struct WeatherPatchDB {
    pub date: Option<String>,
    pub temperature: Option<String>,
    pub rainfall: Option<String>,
    pub humidity: Option<String>,
}

// Conversion to domain models
impl From<WeatherRecordDB> for agriport_core::weather::WeatherRecord {
    fn from(db: WeatherRecordDB) -> Self {
        Self {
            id: db.id,
            date: db.date,
            temperature: db.temperature,
            rainfall: db.rainfall,
            humidity: db.humidity,
        }
    }
}

impl From<agriport_core::weather::NewWeatherRecord> for NewWeatherRecordDB {
    fn from(domain: agriport_core::weather::NewWeatherRecord) -> Self {
        Self {
            date: domain.date,
            temperature: domain.temperature,
            rainfall: domain.rainfall,
            humidity: domain.humidity,
        }
    }
}

impl From<agriport_core::weather::WeatherPatch> for WeatherPatchDB {
    fn from(domain: agriport_core::weather::WeatherPatch) -> Self {
        Self {
            date: domain.date,
            temperature: domain.temperature,
            rainfall: domain.rainfall,
            humidity: domain.humidity,
        }
    }
}
