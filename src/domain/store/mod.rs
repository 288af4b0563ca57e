pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewStore, Store, StoreUpdate};
pub use repository::{StoreReadRepository, StoreWriteRepository};
pub use services::tags::TagCount;
pub use value_objects::{
    Location, LocationKind, SlugPattern, StoreAddress, StoreDescription, StoreId, StoreName,
    StoreSlug,
};
