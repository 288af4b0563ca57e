// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::stores::StoreCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::stores::StoreQueryService,
    },
    config::SlugSettings,
    domain::store::{StoreReadRepository, StoreWriteRepository, services::StoreSlugService},
};

pub struct ApplicationServices {
    pub store_commands: Arc<StoreCommandService>,
    pub store_queries: Arc<StoreQueryService>,
    slug_service: Arc<StoreSlugService>,
}

impl ApplicationServices {
    pub fn new(
        store_write_repo: Arc<dyn StoreWriteRepository>,
        store_read_repo: Arc<dyn StoreReadRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        slug_settings: SlugSettings,
    ) -> Self {
        let slug_service = Arc::new(
            StoreSlugService::new(Arc::clone(&store_read_repo), Arc::clone(&slugger))
                .with_self_exclusion(slug_settings.exclude_self),
        );

        let store_commands = Arc::new(
            StoreCommandService::new(
                Arc::clone(&store_write_repo),
                Arc::clone(&store_read_repo),
                Arc::clone(&slug_service),
                Arc::clone(&clock),
            )
            .with_conflict_retries(slug_settings.conflict_retries),
        );

        let store_queries = Arc::new(StoreQueryService::new(Arc::clone(&store_read_repo)));

        Self {
            store_commands,
            store_queries,
            slug_service,
        }
    }

    pub fn slug_service(&self) -> Arc<StoreSlugService> {
        Arc::clone(&self.slug_service)
    }
}
