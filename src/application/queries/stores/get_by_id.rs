use super::StoreQueryService;
use crate::{
    application::{
        dto::StoreDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::store::StoreId,
};

pub struct GetStoreByIdQuery {
    pub id: i64,
}

impl StoreQueryService {
    pub async fn get_store_by_id(&self, query: GetStoreByIdQuery) -> ApplicationResult<StoreDto> {
        let id = StoreId::new(query.id)?;
        let store = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("store not found"))?;

        Ok(store.into())
    }
}
