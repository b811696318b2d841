use log::debug;
use std::sync::Arc;

use super::users_model::{NewUser, User, UserPatch};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Result, ValidationError};

/// Service for managing portal users.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    /// Creates a new UserService instance
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    /// Lists all registered users
    fn get_users(&self) -> Result<Vec<User>> {
        self.repository.load_users()
    }

    /// Looks up a user by phone number
    fn get_user_by_phone(&self, phone: &str) -> Result<Option<User>> {
        self.repository.find_by_phone(phone)
    }

    /// Checks a phone/password pair against the stored record.
    ///
    /// The comparison is plaintext, exactly as the legacy portal does it.
    /// This is a known weakness kept for compatibility with existing rows;
    /// hardening it would invalidate every stored password.
    fn verify_credentials(&self, phone: &str, password: &str) -> Result<Option<User>> {
        Ok(self
            .repository
            .find_by_phone(phone)?
            .filter(|user| user.password == password))
    }

    /// Registers a new user after checking the required fields
    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        if new_user.name.is_empty() || new_user.phone.is_empty() || new_user.password.is_empty() {
            return Err(ValidationError::MissingFields(
                "name, phone and password are required".to_string(),
            )
            .into());
        }
        debug!("Creating user with phone {}", new_user.phone);
        self.repository.insert_user(new_user).await
    }

    /// Applies a partial update and returns the merged record
    async fn update_user(&self, user_id: i32, patch: UserPatch) -> Result<User> {
        self.repository.update_user(user_id, patch).await
    }

    /// Deletes a user by id
    async fn delete_user(&self, user_id: i32) -> Result<usize> {
        self.repository.delete_user(user_id).await
    }
}
