use agriport_core::users::{NewUser, User, UserPatch, UserRepositoryTrait};
use agriport_core::{Result, StoreError};

use super::model::{NewUserDB, UserDB, UserPatchDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;
use crate::schema::users::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;

use std::sync::Arc;

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn load_users(&self) -> Result<Vec<User>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = users
            .load::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let row = users
            .filter(phone.eq(phone_number))
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(User::from))
    }

    async fn insert_user(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn| {
                let new_user_db = NewUserDB::from(new_user);
                let row = diesel::insert_into(users::table)
                    .values(&new_user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(row))
            })
            .await
    }

    async fn update_user(&self, user_id: i32, patch: UserPatch) -> Result<User> {
        self.writer
            .exec(move |conn| {
                let patch_db = UserPatchDB::from(patch);
                diesel::update(users.find(user_id))
                    .set(&patch_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let row = users
                    .find(user_id)
                    .first::<UserDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(row))
            })
            .await
    }

    async fn delete_user(&self, user_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                let affected = diesel::delete(users.find(user_id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(StoreError::NotFound(format!("no user with id {user_id}")).into());
                }
                Ok(affected)
            })
            .await
    }
}
