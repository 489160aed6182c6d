use diesel::prelude::*;
use jiff_diesel::Timestamp;

/// Course module row read from `module_info`
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::module_info)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ModuleInfo {
    pub id: i32,
    pub module_name: String,
    pub module_duration: i32,
    pub exam_type: String,
    pub version: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload; both timestamps are stamped by the service
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::module_info)]
pub struct NewModuleInfo {
    pub module_name: String,
    pub module_duration: i32,
    pub exam_type: String,
    pub version: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Full replacement of the client-owned columns plus a fresh `updated_at`
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::module_info)]
pub struct UpdateModuleInfo {
    pub module_name: String,
    pub module_duration: i32,
    pub exam_type: String,
    pub version: String,
    pub updated_at: Timestamp,
}

/// Client-owned module columns, as decoded from a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFields {
    pub module_name: String,
    pub module_duration: i32,
    pub exam_type: String,
    pub version: String,
}

impl ModuleFields {
    /// Builds an insert payload with both timestamps set to `now`.
    pub fn into_new(self, now: Timestamp) -> NewModuleInfo {
        NewModuleInfo {
            module_name: self.module_name,
            module_duration: self.module_duration,
            exam_type: self.exam_type,
            version: self.version,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds an update payload stamped with `now`.
    pub fn into_changes(self, now: Timestamp) -> UpdateModuleInfo {
        UpdateModuleInfo {
            module_name: self.module_name,
            module_duration: self.module_duration,
            exam_type: self.exam_type,
            version: self.version,
            updated_at: now,
        }
    }
}

impl ModuleInfo {
    /// Applies an update onto this record, leaving `id` and `created_at` untouched.
    pub fn merged_with(mut self, changes: &UpdateModuleInfo) -> Self {
        self.module_name = changes.module_name.clone();
        self.module_duration = changes.module_duration;
        self.exam_type = changes.exam_type.clone();
        self.version = changes.version.clone();
        self.updated_at = changes.updated_at;
        self
    }
}
