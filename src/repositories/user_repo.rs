//! User repository for async database operations.
//!
//! Provides CRUD operations for the `user_info` table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppResult, DatabaseErrorConverter};
use crate::models::{NewUserInfo, UpdateUserInfo, UserInfo};
use crate::repositories::ResourceStore;

/// User repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceStore for UserRepository {
    type Record = UserInfo;
    type New = NewUserInfo;
    type Changes = UpdateUserInfo;

    /// Inserts the user verbatim; `password_hash` is stored as supplied.
    async fn insert(&self, new_user: NewUserInfo) -> AppResult<UserInfo> {
        use crate::schema::user_info::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(user_info)
            .values(&new_user)
            .returning(UserInfo::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "insert user"))
    }

    async fn find_by_id(&self, user_id: i32) -> AppResult<Option<UserInfo>> {
        use crate::schema::user_info::dsl::*;
        let mut conn = self.pool.get().await?;

        user_info
            .filter(id.eq(user_id))
            .select(UserInfo::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "find user"))
    }

    async fn update(&self, user_id: i32, changes: UpdateUserInfo) -> AppResult<Option<UserInfo>> {
        use crate::schema::user_info::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(user_info.filter(id.eq(user_id)))
            .set(&changes)
            .returning(UserInfo::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "update user"))
    }

    async fn delete(&self, user_id: i32) -> AppResult<usize> {
        use crate::schema::user_info::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(user_info.filter(id.eq(user_id)))
            .execute(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "delete user"))
    }
}
