pub mod stores;

pub use stores::{LocationDto, StoreDto, TagCountDto, TagOverviewDto};
