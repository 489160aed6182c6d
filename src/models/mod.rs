mod module;
mod user;

pub use module::{ModuleFields, ModuleInfo, NewModuleInfo, UpdateModuleInfo};
pub use user::{NewUserInfo, UpdateUserInfo, UserInfo};
