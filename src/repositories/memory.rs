//! In-memory stores backing the service and handler tests.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use jiff_diesel::ToDiesel;

use crate::error::{AppError, AppResult};
use crate::models::{
    ModuleInfo, NewModuleInfo, NewUserInfo, UpdateModuleInfo, UpdateUserInfo, UserInfo,
};
use crate::repositories::ResourceStore;

struct Table<R> {
    rows: BTreeMap<i32, R>,
    last_id: i32,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

/// Shared bookkeeping: rows keyed by a serial id plus a failure switch.
struct MemoryTable<R> {
    table: Mutex<Table<R>>,
    failing: AtomicBool,
}

impl<R: Clone> MemoryTable<R> {
    fn new() -> Self {
        Self {
            table: Mutex::new(Table::default()),
            failing: AtomicBool::new(false),
        }
    }

    fn check(&self, operation: &str) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Database {
                operation: operation.to_string(),
                source: anyhow::anyhow!("connection refused"),
            });
        }
        Ok(())
    }

    fn insert_with(&self, build: impl FnOnce(i32) -> R) -> R {
        let mut table = self.table.lock().unwrap();
        table.last_id += 1;
        let id = table.last_id;
        let row = build(id);
        table.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: i32) -> Option<R> {
        self.table.lock().unwrap().rows.get(&id).cloned()
    }

    fn modify(&self, id: i32, apply: impl FnOnce(&mut R)) -> Option<R> {
        let mut table = self.table.lock().unwrap();
        let row = table.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    fn remove(&self, id: i32) -> usize {
        usize::from(self.table.lock().unwrap().rows.remove(&id).is_some())
    }

    fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }
}

/// `module_info` held in memory.
pub struct MemoryModuleStore {
    inner: MemoryTable<ModuleInfo>,
}

impl MemoryModuleStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryTable::new(),
        }
    }

    /// Makes every following call fail like a lost connection.
    pub fn set_failing(&self, failing: bool) {
        self.inner.failing.store(failing, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl ResourceStore for MemoryModuleStore {
    type Record = ModuleInfo;
    type New = NewModuleInfo;
    type Changes = UpdateModuleInfo;

    async fn insert(&self, new: NewModuleInfo) -> AppResult<ModuleInfo> {
        self.inner.check("insert module")?;
        Ok(self.inner.insert_with(|id| ModuleInfo {
            id,
            module_name: new.module_name,
            module_duration: new.module_duration,
            exam_type: new.exam_type,
            version: new.version,
            created_at: new.created_at,
            updated_at: new.updated_at,
        }))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<ModuleInfo>> {
        self.inner.check("find module")?;
        Ok(self.inner.get(id))
    }

    async fn update(&self, id: i32, changes: UpdateModuleInfo) -> AppResult<Option<ModuleInfo>> {
        self.inner.check("update module")?;
        Ok(self
            .inner
            .modify(id, |row| *row = row.clone().merged_with(&changes)))
    }

    async fn delete(&self, id: i32) -> AppResult<usize> {
        self.inner.check("delete module")?;
        Ok(self.inner.remove(id))
    }
}

/// `user_info` held in memory.
pub struct MemoryUserStore {
    inner: MemoryTable<UserInfo>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryTable::new(),
        }
    }

    /// Makes every following call fail like a lost connection.
    pub fn set_failing(&self, failing: bool) {
        self.inner.failing.store(failing, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl ResourceStore for MemoryUserStore {
    type Record = UserInfo;
    type New = NewUserInfo;
    type Changes = UpdateUserInfo;

    async fn insert(&self, new: NewUserInfo) -> AppResult<UserInfo> {
        self.inner.check("insert user")?;
        // Column defaults
        let now = jiff::Timestamp::now().to_diesel();
        Ok(self.inner.insert_with(|id| UserInfo {
            id,
            created_at: now,
            updated_at: now,
            name: new.name,
            surname: new.surname,
            email: new.email,
            password_hash: new.password_hash,
            role: new.role,
            activated: new.activated,
            version: new.version,
        }))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<UserInfo>> {
        self.inner.check("find user")?;
        Ok(self.inner.get(id))
    }

    async fn update(&self, id: i32, changes: UpdateUserInfo) -> AppResult<Option<UserInfo>> {
        self.inner.check("update user")?;
        Ok(self.inner.modify(id, |row| {
            row.name = changes.name;
            row.surname = changes.surname;
            row.email = changes.email;
            row.password_hash = changes.password_hash;
            row.role = changes.role;
            row.activated = changes.activated;
            row.version = changes.version;
        }))
    }

    async fn delete(&self, id: i32) -> AppResult<usize> {
        self.inner.check("delete user")?;
        Ok(self.inner.remove(id))
    }
}
