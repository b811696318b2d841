use agriport_core::weather::{
    NewWeatherRecord, WeatherPatch, WeatherRecord, WeatherRepositoryTrait,
};
use agriport_core::{Result, StoreError};

use super::model::{NewWeatherRecordDB, WeatherPatchDB, WeatherRecordDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::weather;
use crate::schema::weather::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;

use std::sync::Arc;

pub struct WeatherRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl WeatherRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        WeatherRepository { pool, writer }
    }
}

#[async_trait]
impl WeatherRepositoryTrait for WeatherRepository {
    fn load_weather(&self, date_filter: Option<&str>) -> Result<Vec<WeatherRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = weather.into_boxed();
        if let Some(day) = date_filter {
            query = query.filter(date.eq(day.to_string()));
        }
        let rows = query
            .load::<WeatherRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(WeatherRecord::from).collect())
    }

    async fn insert_weather(&self, new_record: NewWeatherRecord) -> Result<WeatherRecord> {
        self.writer
            .exec(move |conn| {
                let new_record_db = NewWeatherRecordDB::from(new_record);
                let row = diesel::insert_into(weather::table)
                    .values(&new_record_db)
                    .returning(WeatherRecordDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(WeatherRecord::from(row))
            })
            .await
    }

    async fn update_weather(&self, record_id: i32, patch: WeatherPatch) -> Result<WeatherRecord> {
        self.writer
            .exec(move |conn| {
                let patch_db = WeatherPatchDB::from(patch);
                diesel::update(weather.find(record_id))
                    .set(&patch_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let row = weather
                    .find(record_id)
                    .first::<WeatherRecordDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(WeatherRecord::from(row))
            })
            .await
    }

    async fn delete_weather(&self, record_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                let affected = diesel::delete(weather.find(record_id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(StoreError::NotFound(format!(
                        "no weather record with id {record_id}"
                    ))
                    .into());
                }
                Ok(affected)
            })
            .await
    }
}
