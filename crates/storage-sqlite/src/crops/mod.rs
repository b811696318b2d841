//! SQLite storage implementation for crops.

mod model;
mod repository;

pub use model::{CropDB, CropPatchDB, NewCropDB};
pub use repository::CropRepository;
