pub mod admin;
pub mod models;

pub use admin::LevelAdmin;
pub use models::{level_columns, Level, LEVEL_TABLE};
