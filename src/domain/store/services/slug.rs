// src/domain/store/services/slug.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::store::entity::Store;
use crate::domain::store::repository::StoreReadRepository;
use crate::domain::store::value_objects::{SlugPattern, StoreId, StoreName, StoreSlug};

/// Used when a name slugifies to nothing, e.g. a name made only of punctuation.
pub const FALLBACK_BASE_SLUG: &str = "store";

/// Domain service responsible for producing unique slugs for stores.
///
/// The suffix is derived from how many existing slugs match the base slug,
/// not from the highest suffix in use. After deletions this can skip values
/// or land on a slug that is already taken; the storage layer's unique index
/// is what finally rejects such a write.
pub struct StoreSlugService {
    read_repo: Arc<dyn StoreReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    exclude_self: bool,
}

impl StoreSlugService {
    pub fn new(
        read_repo: Arc<dyn StoreReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
            exclude_self: false,
        }
    }

    /// When enabled, a renamed store is left out of its own match count.
    pub fn with_self_exclusion(mut self, exclude_self: bool) -> Self {
        self.exclude_self = exclude_self;
        self
    }

    pub fn base_slug(&self, name: &StoreName) -> DomainResult<StoreSlug> {
        let base = self.generator.slugify(name.as_str());
        if base.is_empty() {
            StoreSlug::new(FALLBACK_BASE_SLUG)
        } else {
            StoreSlug::new(base)
        }
    }

    pub async fn generate_unique_slug(
        &self,
        name: &StoreName,
        ignore_id: Option<StoreId>,
    ) -> DomainResult<StoreSlug> {
        let base = self.base_slug(name)?;
        let pattern = SlugPattern::for_base(&base)?;
        let existing = self.read_repo.find_by_slug_pattern(&pattern).await?;
        let taken = existing
            .iter()
            .filter(|store| ignore_id != Some(store.id))
            .count();

        let slug = if taken == 0 {
            base
        } else {
            base.with_suffix(taken + 1)
        };

        tracing::debug!(
            name = %name,
            pattern = pattern.as_str(),
            taken,
            slug = %slug,
            "resolved store slug"
        );
        Ok(slug)
    }

    /// Pre-save step for updates: returns a fresh slug only when `name`
    /// actually changes the store's name, `None` otherwise.
    pub async fn slug_for_rename(
        &self,
        store: &Store,
        name: &StoreName,
    ) -> DomainResult<Option<StoreSlug>> {
        if !store.is_renamed_by(name) {
            return Ok(None);
        }
        let ignore_id = self.exclude_self.then_some(store.id);
        self.generate_unique_slug(name, ignore_id).await.map(Some)
    }
}
