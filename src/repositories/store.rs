use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{
    ModuleInfo, NewModuleInfo, NewUserInfo, UpdateModuleInfo, UpdateUserInfo, UserInfo,
};

/// Persistence capability shared by every resource.
///
/// `update` and `delete` are keyed by id only; a missing row is reported
/// as `None` or `0`, never as an error.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Stored row type
    type Record: Send;
    /// Insert payload
    type New: Send;
    /// Update payload
    type Changes: Send;

    /// Inserts a row and returns it with its assigned id.
    async fn insert(&self, new: Self::New) -> AppResult<Self::Record>;

    /// Finds a row by id.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Self::Record>>;

    /// Overwrites a row, returning it when one matched.
    async fn update(&self, id: i32, changes: Self::Changes) -> AppResult<Option<Self::Record>>;

    /// Deletes a row, returning the number of rows affected.
    async fn delete(&self, id: i32) -> AppResult<usize>;
}

pub type ModuleStore = Arc<
    dyn ResourceStore<Record = ModuleInfo, New = NewModuleInfo, Changes = UpdateModuleInfo>,
>;

pub type UserStore =
    Arc<dyn ResourceStore<Record = UserInfo, New = NewUserInfo, Changes = UpdateUserInfo>>;
