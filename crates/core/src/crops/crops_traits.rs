use crate::crops::crops_model::{Crop, CropPatch, NewCrop};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for crop repository operations
#[async_trait]
pub trait CropRepositoryTrait: Send + Sync {
    fn load_crops_by_user(&self, owner_id: i32) -> Result<Vec<Crop>>;
    async fn insert_crop(&self, new_crop: NewCrop) -> Result<Crop>;
    async fn update_crop(&self, crop_id: i32, patch: CropPatch) -> Result<Crop>;
    async fn delete_crop(&self, crop_id: i32) -> Result<usize>;
}

/// Trait for crop service operations
#[async_trait]
pub trait CropServiceTrait: Send + Sync {
    fn get_crops_by_user(&self, owner_id: i32) -> Result<Vec<Crop>>;
    async fn create_crop(&self, new_crop: NewCrop) -> Result<Crop>;
    async fn update_crop(&self, crop_id: i32, patch: CropPatch) -> Result<Crop>;
    async fn delete_crop(&self, crop_id: i32) -> Result<usize>;
}
