use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::{NewUserInfo, UpdateUserInfo, UserInfo};

/// Request body for creating or replacing a user.
///
/// Serializable so that an update can echo the payload back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub activated: bool,
    pub version: i32,
}

impl UserRequest {
    pub fn to_new_user(&self) -> NewUserInfo {
        NewUserInfo {
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            role: self.role.clone(),
            activated: self.activated,
            version: self.version,
        }
    }

    pub fn to_update_user(&self) -> UpdateUserInfo {
        UpdateUserInfo {
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            role: self.role.clone(),
            activated: self.activated,
            version: self.version,
        }
    }
}

/// User as returned to clients, including the stored `password_hash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub activated: bool,
    pub version: i32,
}

impl From<UserInfo> for UserResponse {
    fn from(user: UserInfo) -> Self {
        Self {
            id: user.id,
            created_at: user.created_at.to_jiff(),
            updated_at: user.updated_at.to_jiff(),
            name: user.name,
            surname: user.surname,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            activated: user.activated,
            version: user.version,
        }
    }
}
