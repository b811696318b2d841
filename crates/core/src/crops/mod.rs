//! Crops module - domain models, services, and traits.

mod crops_model;
mod crops_service;
mod crops_traits;

// Re-export the public interface
pub use crops_model::{Crop, CropPatch, NewCrop};
pub use crops_service::CropService;
pub use crops_traits::{CropRepositoryTrait, CropServiceTrait};
