// src/domain/store/entity.rs
use crate::domain::store::value_objects::{
    Location, StoreDescription, StoreId, StoreName, StoreSlug,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub id: StoreId,
    pub name: StoreName,
    pub slug: StoreSlug,
    pub description: Option<StoreDescription>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub location: Location,
    pub photo: Option<String>,
}

impl Store {
    /// Whether writing `name` would modify this store's name. Only a real
    /// change triggers slug recomputation.
    pub fn is_renamed_by(&self, name: &StoreName) -> bool {
        self.name != *name
    }
}

#[derive(Debug, Clone)]
pub struct NewStore {
    pub name: StoreName,
    pub slug: StoreSlug,
    pub description: Option<StoreDescription>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub location: Location,
    pub photo: Option<String>,
}

/// Partial update. `None` leaves the stored value untouched; for the
/// optional columns `Some(None)` clears them.
#[derive(Debug, Clone)]
pub struct StoreUpdate {
    pub id: StoreId,
    pub name: Option<StoreName>,
    pub slug: Option<StoreSlug>,
    pub description: Option<Option<StoreDescription>>,
    pub tags: Option<Vec<String>>,
    pub location: Option<Location>,
    pub photo: Option<Option<String>>,
}

impl StoreUpdate {
    pub fn new(id: StoreId) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            description: None,
            tags: None,
            location: None,
            photo: None,
        }
    }

    pub fn with_name(mut self, name: StoreName, slug: StoreSlug) -> Self {
        self.name = Some(name);
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: Option<StoreDescription>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_photo(mut self, photo: Option<String>) -> Self {
        self.photo = Some(photo);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.tags.is_none()
            && self.location.is_none()
            && self.photo.is_none()
    }

    /// Applies the update to an in-memory copy of the store.
    pub fn apply_to(self, store: &mut Store) {
        if let Some(name) = self.name {
            store.name = name;
        }
        if let Some(slug) = self.slug {
            store.slug = slug;
        }
        if let Some(description) = self.description {
            store.description = description;
        }
        if let Some(tags) = self.tags {
            store.tags = tags;
        }
        if let Some(location) = self.location {
            store.location = location;
        }
        if let Some(photo) = self.photo {
            store.photo = photo;
        }
    }
}
