//! User service for business logic operations.
//!
//! Users are stored exactly as supplied: no duplicate-email check and no
//! password hashing. Updates overwrite blindly.

use crate::error::{AppError, AppResult};
use crate::models::{NewUserInfo, UpdateUserInfo, UserInfo};
use crate::repositories::UserStore;

/// User service wrapping the user store.
#[derive(Clone)]
pub struct UserService {
    store: UserStore,
}

impl UserService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Creates a new user.
    ///
    /// # Returns
    /// The created user with generated id and timestamps
    pub async fn create_user(&self, new_user: NewUserInfo) -> AppResult<UserInfo> {
        self.store.insert(new_user).await
    }

    /// Gets a user by their ID.
    ///
    /// # Returns
    /// The user if found, or `NotFound` error
    pub async fn get_user(&self, id: i32) -> AppResult<UserInfo> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("user", "id", id))
    }

    /// Overwrites every client-owned column of the user with this id.
    ///
    /// Succeeds whether or not a row matched; timestamps are left alone.
    pub async fn update_user(&self, id: i32, update_data: UpdateUserInfo) -> AppResult<()> {
        let updated = self.store.update(id, update_data).await?;
        if updated.is_none() {
            tracing::debug!(user_id = id, "User update matched no rows");
        }
        Ok(())
    }

    /// Deletes a user; deleting a missing id is not an error.
    pub async fn delete_user(&self, id: i32) -> AppResult<()> {
        let affected = self.store.delete(id).await?;
        tracing::debug!(user_id = id, affected, "User delete executed");
        Ok(())
    }
}
