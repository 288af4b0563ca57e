mod get_by_id;
mod get_by_slug;
mod list;
mod service;
mod tags;

pub use get_by_id::GetStoreByIdQuery;
pub use get_by_slug::GetStoreBySlugQuery;
pub use list::ListStoresByTagQuery;
pub use service::StoreQueryService;
pub use tags::TagOverviewQuery;
