use agriport_core::crops::{Crop, CropPatch, CropRepositoryTrait, NewCrop};
use agriport_core::{Result, StoreError};

use super::model::{CropDB, CropPatchDB, NewCropDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::crops;
use crate::schema::crops::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;

use std::sync::Arc;

pub struct CropRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CropRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CropRepository { pool, writer }
    }
}

#[async_trait]
impl CropRepositoryTrait for CropRepository {
    fn load_crops_by_user(&self, owner_id: i32) -> Result<Vec<Crop>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = crops
            .filter(user_id.eq(owner_id))
            .load::<CropDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Crop::from).collect())
    }

    async fn insert_crop(&self, new_crop: NewCrop) -> Result<Crop> {
        self.writer
            .exec(move |conn| {
                let new_crop_db = NewCropDB::from(new_crop);
                let row = diesel::insert_into(crops::table)
                    .values(&new_crop_db)
                    .returning(CropDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Crop::from(row))
            })
            .await
    }

    async fn update_crop(&self, crop_id: i32, patch: CropPatch) -> Result<Crop> {
        self.writer
            .exec(move |conn| {
                let patch_db = CropPatchDB::from(patch);
                diesel::update(crops.find(crop_id))
                    .set(&patch_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let row = crops
                    .find(crop_id)
                    .first::<CropDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Crop::from(row))
            })
            .await
    }

    async fn delete_crop(&self, crop_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                let affected = diesel::delete(crops.find(crop_id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(StoreError::NotFound(format!("no crop with id {crop_id}")).into());
                }
                Ok(affected)
            })
            .await
    }
}
