// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_store;

pub use error::map_sqlx;
pub use sqlite_store::{SqliteStoreReadRepository, SqliteStoreWriteRepository};
