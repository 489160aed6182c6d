use diesel::prelude::*;
use jiff_diesel::Timestamp;

/// User account row read from `user_info`
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::user_info)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserInfo {
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

/// Insert payload; timestamps come from column defaults
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::user_info)]
pub struct NewUserInfo {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub activated: bool,
    pub version: i32,
}

/// Blind overwrite of every client-owned column
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::user_info)]
pub struct UpdateUserInfo {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub activated: bool,
    pub version: i32,
}
