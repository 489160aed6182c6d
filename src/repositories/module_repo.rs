//! Module repository for async database operations.
//!
//! Provides CRUD operations for the `module_info` table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppResult, DatabaseErrorConverter};
use crate::models::{ModuleInfo, NewModuleInfo, UpdateModuleInfo};
use crate::repositories::ResourceStore;

/// Module repository holding an async connection pool.
#[derive(Clone)]
pub struct ModuleRepository {
    pool: AsyncDbPool,
}

impl ModuleRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceStore for ModuleRepository {
    type Record = ModuleInfo;
    type New = NewModuleInfo;
    type Changes = UpdateModuleInfo;

    async fn insert(&self, new_module: NewModuleInfo) -> AppResult<ModuleInfo> {
        use crate::schema::module_info::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(module_info)
            .values(&new_module)
            .returning(ModuleInfo::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "insert module"))
    }

    async fn find_by_id(&self, module_id: i32) -> AppResult<Option<ModuleInfo>> {
        use crate::schema::module_info::dsl::*;
        let mut conn = self.pool.get().await?;

        module_info
            .filter(id.eq(module_id))
            .select(ModuleInfo::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "find module"))
    }

    async fn update(
        &self,
        module_id: i32,
        changes: UpdateModuleInfo,
    ) -> AppResult<Option<ModuleInfo>> {
        use crate::schema::module_info::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(module_info.filter(id.eq(module_id)))
            .set(&changes)
            .returning(ModuleInfo::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "update module"))
    }

    async fn delete(&self, module_id: i32) -> AppResult<usize> {
        use crate::schema::module_info::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(module_info.filter(id.eq(module_id)))
            .execute(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "delete module"))
    }
}
