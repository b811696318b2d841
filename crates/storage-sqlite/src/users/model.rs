//! Database models for users.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for users
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub password: String,
    pub is_admin: bool,
}

/// Database model for creating a new user
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub name: String,
    pub phone: String,
    pub password: String,
    pub is_admin: bool,
}

/// Changeset for partial user updates; `None` fields are left untouched
#[derive(AsChangeset, Serialize, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::users)]
pub struct UserPatchDB {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

// Conversion to domain models
impl From<UserDB> for agriport_core::users::User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            phone: db.phone,
            password: db.password,
            is_admin: db.is_admin,
        }
    }
}

impl From<agriport_core::users::NewUser> for NewUserDB {
    fn from(domain: agriport_core::users::NewUser) -> Self {
        Self {
            name: domain.name,
            phone: domain.phone,
            password: domain.password,
            is_admin: domain.is_admin,
        }
    }
}

impl From<agriport_core::users::UserPatch> for UserPatchDB {
    fn from(domain: agriport_core::users::UserPatch) -> Self {
        Self {
            name: domain.name,
            phone: domain.phone,
            password: domain.password,
            is_admin: domain.is_admin,
        }
    }
}
