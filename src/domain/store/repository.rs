use crate::domain::errors::DomainResult;
use crate::domain::store::entity::{NewStore, Store, StoreUpdate};
use crate::domain::store::services::tags::{self, TagCount};
use crate::domain::store::value_objects::{SlugPattern, StoreId, StoreSlug};
use async_trait::async_trait;

#[async_trait]
pub trait StoreWriteRepository: Send + Sync {
    async fn insert(&self, store: NewStore) -> DomainResult<Store>;
    async fn update(&self, update: StoreUpdate) -> DomainResult<Store>;
    async fn delete(&self, id: StoreId) -> DomainResult<()>;
}

#[async_trait]
pub trait StoreReadRepository: Send + Sync {
    async fn find_by_id(&self, id: StoreId) -> DomainResult<Option<Store>>;
    async fn find_by_slug(&self, slug: &StoreSlug) -> DomainResult<Option<Store>>;

    /// Every store whose slug matches `pattern`.
    async fn find_by_slug_pattern(&self, pattern: &SlugPattern) -> DomainResult<Vec<Store>>;

    /// All stores, newest first.
    async fn list(&self) -> DomainResult<Vec<Store>>;

    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<Store>>;

    /// Tag frequencies over the whole collection. Backends able to aggregate
    /// natively should override this and return the same ordering.
    async fn tag_counts(&self) -> DomainResult<Vec<TagCount>> {
        let stores = self.list().await?;
        Ok(tags::count_tags(stores.iter().map(|store| store.tags.as_slice())))
    }
}
