use std::sync::Arc;

use crate::domain::store::StoreReadRepository;

pub struct StoreQueryService {
    pub(super) read_repo: Arc<dyn StoreReadRepository>,
}

impl StoreQueryService {
    pub fn new(read_repo: Arc<dyn StoreReadRepository>) -> Self {
        Self { read_repo }
    }
}
