use anyhow::Result;
use std::sync::Arc;
use store_catalog::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use store_catalog::config::AppConfig;
use store_catalog::domain::store::{StoreReadRepository, StoreWriteRepository};
use store_catalog::infrastructure::{
    database,
    repositories::{SqliteStoreReadRepository, SqliteStoreWriteRepository},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let store_write_repo: Arc<dyn StoreWriteRepository> =
        Arc::new(SqliteStoreWriteRepository::new(Arc::clone(&pool)));
    let store_read_repo: Arc<dyn StoreReadRepository> =
        Arc::new(SqliteStoreReadRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(
        store_write_repo,
        store_read_repo,
        clock,
        slugger,
        config.slug_settings(),
    );
    tracing::info!(database_url = config.database_url(), "store catalog ready");

    let stores = services.store_queries.list_stores().await?;
    let tags = services.store_queries.tag_counts().await?;
    tracing::info!(stores = stores.len(), distinct_tags = tags.len(), "catalog summary");
    for entry in &tags {
        tracing::info!(tag = %entry.tag, count = entry.count, "tag");
    }

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
