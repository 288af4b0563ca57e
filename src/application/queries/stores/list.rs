use super::StoreQueryService;
use crate::application::{
    dto::StoreDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct ListStoresByTagQuery {
    pub tag: String,
}

impl StoreQueryService {
    pub async fn list_stores(&self) -> ApplicationResult<Vec<StoreDto>> {
        let stores = self.read_repo.list().await?;
        Ok(stores.into_iter().map(Into::into).collect())
    }

    pub async fn list_stores_by_tag(
        &self,
        query: ListStoresByTagQuery,
    ) -> ApplicationResult<Vec<StoreDto>> {
        if query.tag.is_empty() {
            return Err(ApplicationError::validation("tag cannot be empty"));
        }
        let stores = self.read_repo.list_by_tag(&query.tag).await?;
        Ok(stores.into_iter().map(Into::into).collect())
    }
}
