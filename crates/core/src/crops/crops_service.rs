use log::debug;
use std::sync::Arc;

use super::crops_model::{Crop, CropPatch, NewCrop};
use super::crops_traits::{CropRepositoryTrait, CropServiceTrait};
use crate::errors::{Result, ValidationError};

/// Service for managing crops.
pub struct CropService {
    repository: Arc<dyn CropRepositoryTrait>,
}

impl CropService {
    /// Creates a new CropService instance
    pub fn new(repository: Arc<dyn CropRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl CropServiceTrait for CropService {
    /// Lists the crops owned by one user
    fn get_crops_by_user(&self, owner_id: i32) -> Result<Vec<Crop>> {
        self.repository.load_crops_by_user(owner_id)
    }

    /// Records a new crop after checking the required fields
    async fn create_crop(&self, new_crop: NewCrop) -> Result<Crop> {
        if new_crop.user_id <= 0 || new_crop.crop_name.is_empty() {
            return Err(ValidationError::MissingFields(
                "user_id and crop_name are required".to_string(),
            )
            .into());
        }
        debug!(
            "Creating crop '{}' for user {}",
            new_crop.crop_name, new_crop.user_id
        );
        self.repository.insert_crop(new_crop).await
    }

    /// Applies a partial update and returns the merged record
    async fn update_crop(&self, crop_id: i32, patch: CropPatch) -> Result<Crop> {
        self.repository.update_crop(crop_id, patch).await
    }

    /// Deletes a crop by id
    async fn delete_crop(&self, crop_id: i32) -> Result<usize> {
        self.repository.delete_crop(crop_id).await
    }
}
