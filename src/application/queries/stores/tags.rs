// src/application/queries/stores/tags.rs
use super::StoreQueryService;
use crate::{
    application::{
        dto::{StoreDto, TagCountDto, TagOverviewDto},
        error::ApplicationResult,
    },
    domain::{errors::DomainResult, store::Store},
};

/// Without a tag, the overview lists every store that carries at least one.
#[derive(Debug, Clone, Default)]
pub struct TagOverviewQuery {
    pub tag: Option<String>,
}

impl StoreQueryService {
    /// Tag frequencies across the catalog, most used first, ties by tag name.
    pub async fn tag_counts(&self) -> ApplicationResult<Vec<TagCountDto>> {
        let counts = self.read_repo.tag_counts().await?;
        Ok(counts.into_iter().map(Into::into).collect())
    }

    pub async fn tag_overview(&self, query: TagOverviewQuery) -> ApplicationResult<TagOverviewDto> {
        let tag = query.tag.filter(|t| !t.is_empty());
        let (counts, stores) =
            tokio::try_join!(self.read_repo.tag_counts(), self.tagged_stores(tag.as_deref()))?;

        Ok(TagOverviewDto {
            tag,
            tags: counts.into_iter().map(Into::into).collect(),
            stores: stores.into_iter().map(StoreDto::from).collect(),
        })
    }

    async fn tagged_stores(&self, tag: Option<&str>) -> DomainResult<Vec<Store>> {
        match tag {
            Some(tag) => self.read_repo.list_by_tag(tag).await,
            None => {
                let stores = self.read_repo.list().await?;
                Ok(stores.into_iter().filter(|s| !s.tags.is_empty()).collect())
            }
        }
    }
}
