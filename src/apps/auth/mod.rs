pub mod admin;
pub mod models;

pub use admin::{RoleAdmin, UserAdmin, ADMIN_ROLE};
pub use models::{role_columns, user_columns, Role, User};
