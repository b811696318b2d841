use crate::errors::Result;
use crate::users::users_model::{NewUser, User, UserPatch};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn load_users(&self) -> Result<Vec<User>>;
    fn find_by_phone(&self, phone: &str) -> Result<Option<User>>;
    async fn insert_user(&self, new_user: NewUser) -> Result<User>;
    async fn update_user(&self, user_id: i32, patch: UserPatch) -> Result<User>;
    async fn delete_user(&self, user_id: i32) -> Result<usize>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_users(&self) -> Result<Vec<User>>;
    fn get_user_by_phone(&self, phone: &str) -> Result<Option<User>>;
    fn verify_credentials(&self, phone: &str, password: &str) -> Result<Option<User>>;
    async fn create_user(&self, new_user: NewUser) -> Result<User>;
    async fn update_user(&self, user_id: i32, patch: UserPatch) -> Result<User>;
    async fn delete_user(&self, user_id: i32) -> Result<usize>;
}
