//! SQLite storage implementation for users.

mod model;
mod repository;

pub use model::{NewUserDB, UserDB, UserPatchDB};
pub use repository::UserRepository;
