use super::error::{map_json, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::store::{
    Location, LocationKind, NewStore, SlugPattern, Store, StoreAddress, StoreDescription,
    StoreId, StoreName, StoreReadRepository, StoreSlug, StoreUpdate, StoreWriteRepository,
    TagCount,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const SELECT_STORES: &str = "SELECT id, name, slug, description, tags, created_at, location_type, coordinates, address, photo FROM stores";
const RETURNING_STORE: &str = " RETURNING id, name, slug, description, tags, created_at, location_type, coordinates, address, photo";

#[derive(Clone)]
pub struct SqliteStoreWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStoreWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteStoreReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStoreReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct StoreRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    tags: String,
    created_at: DateTime<Utc>,
    location_type: String,
    coordinates: String,
    address: String,
    photo: Option<String>,
}

impl TryFrom<StoreRow> for Store {
    type Error = DomainError;

    fn try_from(row: StoreRow) -> Result<Self, Self::Error> {
        let tags: Vec<String> = serde_json::from_str(&row.tags).map_err(map_json)?;
        let coordinates: Vec<f64> = serde_json::from_str(&row.coordinates).map_err(map_json)?;
        let location = Location::new(
            row.location_type.parse::<LocationKind>()?,
            coordinates,
            StoreAddress::new(row.address)?,
        )?;

        Ok(Store {
            id: StoreId::new(row.id)?,
            name: StoreName::new(row.name)?,
            slug: StoreSlug::new(row.slug)?,
            description: StoreDescription::parse(row.description),
            tags,
            created_at: row.created_at,
            location,
            photo: row.photo,
        })
    }
}

fn rows_to_stores(rows: Vec<StoreRow>) -> DomainResult<Vec<Store>> {
    rows.into_iter().map(Store::try_from).collect()
}

/// Escapes `LIKE` wildcards so the value is matched literally with `ESCAPE '\'`.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl StoreWriteRepository for SqliteStoreWriteRepository {
    async fn insert(&self, store: NewStore) -> DomainResult<Store> {
        let NewStore {
            name,
            slug,
            description,
            tags,
            created_at,
            location,
            photo,
        } = store;

        let tags = serde_json::to_string(&tags).map_err(map_json)?;
        let coordinates = serde_json::to_string(&location.coordinates).map_err(map_json)?;

        let row = sqlx::query_as::<_, StoreRow>(
            "INSERT INTO stores (name, slug, description, tags, created_at, location_type, coordinates, address, photo)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id, name, slug, description, tags, created_at, location_type, coordinates, address, photo",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(description.as_ref().map(StoreDescription::as_str))
        .bind(tags)
        .bind(created_at)
        .bind(location.kind.as_str())
        .bind(coordinates)
        .bind(location.address.as_str())
        .bind(photo)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Store::try_from(row)
    }

    async fn update(&self, update: StoreUpdate) -> DomainResult<Store> {
        let StoreUpdate {
            id,
            name,
            slug,
            description,
            tags,
            location,
            photo,
        } = update;

        let tags = tags
            .map(|tags| serde_json::to_string(&tags))
            .transpose()
            .map_err(map_json)?;
        let coordinates = location
            .as_ref()
            .map(|location| serde_json::to_string(&location.coordinates))
            .transpose()
            .map_err(map_json)?;

        // `id = id` keeps the SET list valid when nothing else changes.
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE stores SET id = id");

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(String::from(name));
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description.map(StoreDescription::into_inner));
        }

        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tags);
        }

        if let (Some(location), Some(coordinates)) = (location, coordinates) {
            builder.push(", location_type = ");
            builder.push_bind(location.kind.as_str());
            builder.push(", coordinates = ");
            builder.push_bind(coordinates);
            builder.push(", address = ");
            builder.push_bind(location.address.into_inner());
        }

        if let Some(photo) = photo {
            builder.push(", photo = ");
            builder.push_bind(photo);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(RETURNING_STORE);

        let row = builder
            .build_query_as::<StoreRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("store not found".into()))?;

        Store::try_from(row)
    }

    async fn delete(&self, id: StoreId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM stores WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("store not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl StoreReadRepository for SqliteStoreReadRepository {
    async fn find_by_id(&self, id: StoreId) -> DomainResult<Option<Store>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_STORES);
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));

        let row = builder
            .build_query_as::<StoreRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Store::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &StoreSlug) -> DomainResult<Option<Store>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_STORES);
        builder.push(" WHERE slug = ");
        builder.push_bind(slug.as_str());

        let row = builder
            .build_query_as::<StoreRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Store::try_from).transpose()
    }

    async fn find_by_slug_pattern(&self, pattern: &SlugPattern) -> DomainResult<Vec<Store>> {
        // SQLite has no REGEXP by default: narrow by prefix, then match exactly.
        let prefix = format!("{}%", escape_like(pattern.base().as_str()));

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_STORES);
        builder.push(" WHERE slug LIKE ");
        builder.push_bind(prefix);
        builder.push(" ESCAPE '\\' ORDER BY id");

        let rows = builder
            .build_query_as::<StoreRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let stores = rows_to_stores(rows)?;
        Ok(stores
            .into_iter()
            .filter(|store| pattern.matches(store.slug.as_str()))
            .collect())
    }

    async fn list(&self) -> DomainResult<Vec<Store>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_STORES);
        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build_query_as::<StoreRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows_to_stores(rows)
    }

    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<Store>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_STORES);
        builder.push(" WHERE EXISTS (SELECT 1 FROM json_each(stores.tags) WHERE json_each.value = ");
        builder.push_bind(tag);
        builder.push(") ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build_query_as::<StoreRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows_to_stores(rows)
    }

    async fn tag_counts(&self) -> DomainResult<Vec<TagCount>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT tag_row.value AS tag, COUNT(*) AS count
             FROM stores, json_each(stores.tags) AS tag_row
             GROUP BY tag_row.value
             ORDER BY count DESC, tag ASC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|(tag, count)| {
                u64::try_from(count)
                    .map(|count| TagCount::new(tag, count))
                    .map_err(|_| DomainError::Persistence(format!("negative tag count: {count}")))
            })
            .collect()
    }
}
