// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use sqlx::SqlitePool;
use store_catalog::application::services::ApplicationServices;
use store_catalog::config::SlugSettings;
use store_catalog::domain::store::{StoreReadRepository, StoreWriteRepository};
use store_catalog::infrastructure::{database, util::DefaultSlugGenerator};

/// Services over a single in-memory repository with the real slug generator.
pub fn build_services(
    repo: Arc<mocks::InMemoryStoreRepo>,
    settings: SlugSettings,
) -> ApplicationServices {
    let write: Arc<dyn StoreWriteRepository> = repo.clone();
    let read: Arc<dyn StoreReadRepository> = repo;
    build_services_with(write, read, settings)
}

pub fn build_services_with(
    write: Arc<dyn StoreWriteRepository>,
    read: Arc<dyn StoreReadRepository>,
    settings: SlugSettings,
) -> ApplicationServices {
    ApplicationServices::new(
        write,
        read,
        Arc::new(mocks::DummyClock),
        Arc::new(DefaultSlugGenerator),
        settings,
    )
}

/// Fresh migrated in-memory database. One connection, since every
/// `sqlite::memory:` connection opens its own database.
pub async fn sqlite_pool() -> Arc<SqlitePool> {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    Arc::new(pool)
}
