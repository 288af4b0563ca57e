// src/application/commands/stores/mod.rs
mod create;
mod delete;
mod location;
mod service;
mod update;

pub use create::{CreateStoreCommand, CreateStoreCommandBuilder};
pub use delete::DeleteStoreCommand;
pub use location::LocationInput;
pub use service::StoreCommandService;
pub use update::UpdateStoreCommand;
