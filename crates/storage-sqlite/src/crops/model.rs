//! Database models for crops.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::users::UserDB;

/// Database model for crops
#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::crops)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CropDB {
    pub id: i32,
    pub user_id: i32,
    pub crop_name: String,
    pub area: Option<f64>,
    pub sow_date: Option<String>,
    pub fertilizer: Option<String>,
    pub expected_yield: Option<f64>,
}

/// Database model for creating a new crop
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::crops)]
pub struct NewCropDB {
    pub user_id: i32,
    pub crop_name: String,
    pub area: Option<f64>,
    pub sow_date: Option<String>,
    pub fertilizer: Option<String>,
    pub expected_yield: Option<f64>,
}

/// Changeset for partial crop updates; `None` fields are left untouched
#[derive(AsChangeset, Serialize, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::crops)]
pub struct CropPatchDB {
    pub user_id: Option<i32>,
    pub crop_name: Option<String>,
    pub area: Option<f64>,
    pub sow_date: Option<String>,
    pub fertilizer: Option<String>,
    pub expected_yield: Option<f64>,
}

// Conversion to domain models
impl From<CropDB> for agriport_core::crops::Crop {
    fn from(db: CropDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            crop_name: db.crop_name,
            area: db.area,
            sow_date: db.sow_date,
            fertilizer: db.fertilizer,
            expected_yield: db.expected_yield,
        }
    }
}

impl From<agriport_core::crops::NewCrop> for NewCropDB {
    fn from(domain: agriport_core::crops::NewCrop) -> Self {
        Self {
            user_id: domain.user_id,
            crop_name: domain.crop_name,
            area: domain.area,
            sow_date: domain.sow_date,
            fertilizer: domain.fertilizer,
            expected_yield: domain.expected_yield,
        }
    }
}

impl From<agriport_core::crops::CropPatch> for CropPatchDB {
    fn from(domain: agriport_core::crops::CropPatch) -> Self {
        Self {
            user_id: domain.user_id,
            crop_name: domain.crop_name,
            area: domain.area,
            sow_date: domain.sow_date,
            fertilizer: domain.fertilizer,
            expected_yield: domain.expected_yield,
        }
    }
}
