// src/domain/store/services/mod.rs
pub mod slug;
pub mod tags;

pub use slug::StoreSlugService;
