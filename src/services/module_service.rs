//! Module service for business logic operations.
//!
//! Owns the server-side timestamps of `module_info` rows and the
//! read-then-merge update semantics.

use jiff_diesel::ToDiesel;

use crate::error::{AppError, AppResult};
use crate::models::{ModuleFields, ModuleInfo};
use crate::repositories::ModuleStore;

/// Module service wrapping the module store.
#[derive(Clone)]
pub struct ModuleService {
    store: ModuleStore,
}

impl ModuleService {
    pub fn new(store: ModuleStore) -> Self {
        Self { store }
    }

    /// Creates a module with `created_at` and `updated_at` set to now.
    ///
    /// # Returns
    /// The stored module with its assigned id
    pub async fn create_module(&self, fields: ModuleFields) -> AppResult<ModuleInfo> {
        let now = jiff::Timestamp::now().to_diesel();
        self.store.insert(fields.into_new(now)).await
    }

    /// Gets a module by its ID.
    ///
    /// # Returns
    /// The module if found, or `NotFound` error
    pub async fn get_module(&self, id: i32) -> AppResult<ModuleInfo> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("module", "id", id))
    }

    /// Replaces the client-owned fields of an existing module.
    ///
    /// `existing` must come from [`ModuleService::get_module`]. The read and
    /// the write are not atomic: if the row disappears in between, the merged
    /// record is still returned.
    pub async fn update_module(
        &self,
        existing: ModuleInfo,
        fields: ModuleFields,
    ) -> AppResult<ModuleInfo> {
        let changes = fields.into_changes(jiff::Timestamp::now().to_diesel());

        match self.store.update(existing.id, changes.clone()).await? {
            Some(updated) => Ok(updated),
            None => {
                tracing::warn!(module_id = existing.id, "Module vanished before update");
                Ok(existing.merged_with(&changes))
            }
        }
    }

    /// Deletes a module; deleting a missing id is not an error.
    pub async fn delete_module(&self, id: i32) -> AppResult<()> {
        let affected = self.store.delete(id).await?;
        tracing::debug!(module_id = id, affected, "Module delete executed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::repositories::memory::MemoryModuleStore;

    fn fields(name: &str) -> ModuleFields {
        ModuleFields {
            module_name: name.to_string(),
            module_duration: 12,
            exam_type: "written".to_string(),
            version: "1.0".to_string(),
        }
    }

    fn service() -> (ModuleService, Arc<MemoryModuleStore>) {
        let store = Arc::new(MemoryModuleStore::new());
        (ModuleService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_create_stamps_both_timestamps() {
        let (service, _) = service();

        let module = service.create_module(fields("CS101")).await.unwrap();
        assert!(module.id > 0);
        assert_eq!(module.created_at, module.updated_at);
        assert_eq!(module.module_name, "CS101");
    }

    #[tokio::test]
    async fn test_get_missing_module_is_not_found() {
        let (service, _) = service();

        let err = service.get_module(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { value, .. } if value == "99"));
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let (service, _) = service();
        let created = service.create_module(fields("CS101")).await.unwrap();

        let existing = service.get_module(created.id).await.unwrap();
        let updated = service
            .update_module(existing, fields("CS102"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.module_name, "CS102");
        assert!(updated.updated_at.to_jiff() >= created.updated_at.to_jiff());
    }

    #[tokio::test]
    async fn test_update_after_concurrent_delete_returns_merged_record() {
        let (service, _) = service();
        let created = service.create_module(fields("CS101")).await.unwrap();
        let existing = service.get_module(created.id).await.unwrap();

        service.delete_module(created.id).await.unwrap();
        let merged = service
            .update_module(existing, fields("CS201"))
            .await
            .unwrap();

        assert_eq!(merged.id, created.id);
        assert_eq!(merged.module_name, "CS201");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (service, store) = service();
        let created = service.create_module(fields("CS101")).await.unwrap();

        assert!(service.delete_module(created.id).await.is_ok());
        assert!(service.delete_module(created.id).await.is_ok());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let (service, store) = service();
        store.set_failing(true);

        let err = service.create_module(fields("CS101")).await.unwrap_err();
        assert!(matches!(err, AppError::Database { operation, .. } if operation == "insert module"));
    }
}
