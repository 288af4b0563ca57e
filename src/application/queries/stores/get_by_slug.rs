use super::StoreQueryService;
use crate::{
    application::{
        dto::StoreDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::store::StoreSlug,
};

pub struct GetStoreBySlugQuery {
    pub slug: String,
}

impl StoreQueryService {
    pub async fn get_store_by_slug(
        &self,
        query: GetStoreBySlugQuery,
    ) -> ApplicationResult<StoreDto> {
        let slug = StoreSlug::new(query.slug)?;
        let store = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("store not found"))?;

        Ok(store.into())
    }
}
