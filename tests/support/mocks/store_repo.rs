// tests/support/mocks/store_repo.rs
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use store_catalog::domain::errors::{DomainError, DomainResult};
use store_catalog::domain::store::{
    NewStore, SlugPattern, Store, StoreId, StoreReadRepository, StoreSlug, StoreUpdate,
    StoreWriteRepository,
};

/* -------------------------------- InMemoryStoreRepo -------------------------------- */

/// インメモリの店舗リポジトリ。スラッグの一意制約（大文字小文字を区別しない）を再現する。
pub struct InMemoryStoreRepo {
    inner: Mutex<State>,
    inserts: AtomicUsize,
}

struct State {
    stores: Vec<Store>,
    next_id: i64,
}

fn slug_taken(stores: &[Store], slug: &StoreSlug, except: Option<StoreId>) -> bool {
    stores
        .iter()
        .filter(|s| Some(s.id) != except)
        .any(|s| s.slug.as_str().eq_ignore_ascii_case(slug.as_str()))
}

impl InMemoryStoreRepo {
    pub fn new() -> Self {
        Self::with_stores(Vec::new())
    }

    pub fn with_stores(stores: Vec<Store>) -> Self {
        let next_id = stores.iter().map(|s| i64::from(s.id)).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(State { stores, next_id }),
            inserts: AtomicUsize::new(0),
        }
    }

    pub fn snapshot(&self) -> Vec<Store> {
        self.inner.lock().unwrap().stores.clone()
    }

    pub fn slugs(&self) -> Vec<String> {
        self.snapshot()
            .into_iter()
            .map(|s| s.slug.into_inner())
            .collect()
    }

    /// Number of insert attempts, including rejected ones.
    pub fn insert_attempts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoreWriteRepository for InMemoryStoreRepo {
    async fn insert(&self, new: NewStore) -> DomainResult<Store> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let mut state = self.inner.lock().unwrap();
        if slug_taken(&state.stores, &new.slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let store = Store {
            id: StoreId::new(state.next_id)?,
            name: new.name,
            slug: new.slug,
            description: new.description,
            tags: new.tags,
            created_at: new.created_at,
            location: new.location,
            photo: new.photo,
        };
        state.next_id += 1;
        state.stores.push(store.clone());
        Ok(store)
    }

    async fn update(&self, update: StoreUpdate) -> DomainResult<Store> {
        let mut state = self.inner.lock().unwrap();
        let index = state
            .stores
            .iter()
            .position(|s| s.id == update.id)
            .ok_or_else(|| DomainError::NotFound("store not found".into()))?;

        if let Some(slug) = &update.slug {
            if slug_taken(&state.stores, slug, Some(update.id)) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        let mut store = state.stores[index].clone();
        update.apply_to(&mut store);
        state.stores[index] = store.clone();
        Ok(store)
    }

    async fn delete(&self, id: StoreId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        let before = state.stores.len();
        state.stores.retain(|s| s.id != id);
        if state.stores.len() == before {
            return Err(DomainError::NotFound("store not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl StoreReadRepository for InMemoryStoreRepo {
    async fn find_by_id(&self, id: StoreId) -> DomainResult<Option<Store>> {
        let state = self.inner.lock().unwrap();
        Ok(state.stores.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &StoreSlug) -> DomainResult<Option<Store>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .stores
            .iter()
            .find(|s| s.slug.as_str().eq_ignore_ascii_case(slug.as_str()))
            .cloned())
    }

    async fn find_by_slug_pattern(&self, pattern: &SlugPattern) -> DomainResult<Vec<Store>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .stores
            .iter()
            .filter(|s| pattern.matches(s.slug.as_str()))
            .cloned()
            .collect())
    }

    async fn list(&self) -> DomainResult<Vec<Store>> {
        let mut stores = self.snapshot();
        stores.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(stores)
    }

    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<Store>> {
        let stores = self.list().await?;
        Ok(stores
            .into_iter()
            .filter(|s| s.tags.iter().any(|t| t == tag))
            .collect())
    }
}

/* -------------------------------- StaleSlugReadRepo -------------------------------- */

/// 並行書き込みを模擬する: 最初の `stale_reads` 回のスラッグ検索は空を返す。
pub struct StaleSlugReadRepo {
    inner: Arc<InMemoryStoreRepo>,
    stale_reads: AtomicUsize,
}

impl StaleSlugReadRepo {
    pub fn new(inner: Arc<InMemoryStoreRepo>, stale_reads: usize) -> Self {
        Self {
            inner,
            stale_reads: AtomicUsize::new(stale_reads),
        }
    }
}

#[async_trait]
impl StoreReadRepository for StaleSlugReadRepo {
    async fn find_by_id(&self, id: StoreId) -> DomainResult<Option<Store>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(&self, slug: &StoreSlug) -> DomainResult<Option<Store>> {
        self.inner.find_by_slug(slug).await
    }

    async fn find_by_slug_pattern(&self, pattern: &SlugPattern) -> DomainResult<Vec<Store>> {
        let stale = self
            .stale_reads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if stale {
            return Ok(Vec::new());
        }
        self.inner.find_by_slug_pattern(pattern).await
    }

    async fn list(&self) -> DomainResult<Vec<Store>> {
        self.inner.list().await
    }

    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<Store>> {
        self.inner.list_by_tag(tag).await
    }
}

/* -------------------------------- FailingStoreRepo -------------------------------- */

/// 全操作が永続化エラーを返すリポジトリ
pub struct FailingStoreRepo {
    calls: AtomicUsize,
}

impl FailingStoreRepo {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> DomainResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Persistence("database is unavailable".into()))
    }
}

#[async_trait]
impl StoreWriteRepository for FailingStoreRepo {
    async fn insert(&self, _new: NewStore) -> DomainResult<Store> {
        self.fail()
    }

    async fn update(&self, _update: StoreUpdate) -> DomainResult<Store> {
        self.fail()
    }

    async fn delete(&self, _id: StoreId) -> DomainResult<()> {
        self.fail()
    }
}

#[async_trait]
impl StoreReadRepository for FailingStoreRepo {
    async fn find_by_id(&self, _id: StoreId) -> DomainResult<Option<Store>> {
        self.fail()
    }

    async fn find_by_slug(&self, _slug: &StoreSlug) -> DomainResult<Option<Store>> {
        self.fail()
    }

    async fn find_by_slug_pattern(&self, _pattern: &SlugPattern) -> DomainResult<Vec<Store>> {
        self.fail()
    }

    async fn list(&self) -> DomainResult<Vec<Store>> {
        self.fail()
    }

    async fn list_by_tag(&self, _tag: &str) -> DomainResult<Vec<Store>> {
        self.fail()
    }
}
